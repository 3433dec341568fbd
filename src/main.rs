//! Indigo at the terminal: the human against the computer.

use std::io;

use clap::Parser;
use indigo::{Session, SessionOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "indigo")]
#[command(about = "Play the Indigo card game against the computer")]
struct Args {
    /// Seed for the shuffle and the computer's choices (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the game transcript.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), args.seed);
    match session.run()? {
        SessionOutcome::Finished(report) => {
            info!(seed = report.seed, turns = report.history.len(), "game finished");
        }
        SessionOutcome::Abandoned => info!("game abandoned"),
    }

    Ok(())
}
