//! One console game from banner to "Game Over".

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::prompt::{parse_card_index, parse_play_first, Prompter, Reply};
use super::render::{card_prompt, cards_line, hand_listing, score_lines, table_summary};
use crate::core::{EngineError, MatchConfig, Participant};
use crate::rules::{Match, MatchReport};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Played to the end.
    Finished(MatchReport),
    /// The human typed `exit` (or input closed). Nothing is scored.
    Abandoned,
}

/// Drives a match from console input.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, seed: Option<u64>) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            seed,
        }
    }

    /// Play one game. "Game Over" is printed whether or not it was finished.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        self.prompter.say("Indigo Card Game")?;
        let outcome = self.play_match()?;
        self.prompter.say("Game Over")?;
        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn play_match(&mut self) -> Result<SessionOutcome, SessionError> {
        let first = match self.prompter.ask("Play first?", parse_play_first)? {
            Reply::Answer(first) => first,
            Reply::Exit => return Ok(SessionOutcome::Abandoned),
        };

        let config = MatchConfig::new()
            .with_optional_seed(self.seed)
            .with_first(first);
        let mut game = Match::new(&config)?;

        self.prompter.say(format!(
            "Initial cards on the table: {}",
            cards_line(game.state().table.cards())
        ))?;

        while !game.is_over() {
            self.prompter.say("")?;
            self.prompter.say(table_summary(game.state().table.cards()))?;

            let Some(index) = self.next_play(&mut game)? else {
                debug!(turn = game.state().turn_number, "match abandoned");
                return Ok(SessionOutcome::Abandoned);
            };

            let record = game.play(index)?;
            if record.is_capture() {
                self.prompter.say(format!("{} wins cards", record.participant))?;
                self.prompter.say(score_lines(&game.running_score()))?;
            }
        }

        self.prompter.say("")?;
        self.prompter.say(table_summary(game.state().table.cards()))?;
        let report = game.finish()?;
        self.prompter.say(score_lines(&report.score))?;

        Ok(SessionOutcome::Finished(report))
    }

    /// The active participant's 1-based choice, or `None` on exit.
    fn next_play(&mut self, game: &mut Match) -> Result<Option<usize>, SessionError> {
        match game.active() {
            Participant::Human => {
                let hand = game.hand(Participant::Human);
                let hand_size = hand.len();
                self.prompter.say(hand_listing(hand))?;

                let reply = self
                    .prompter
                    .ask(&card_prompt(hand_size), |s| parse_card_index(s, hand_size))?;
                Ok(match reply {
                    Reply::Answer(index) => Some(index),
                    Reply::Exit => None,
                })
            }
            Participant::Computer => {
                let index = game.suggest_play()?;
                let hand = game.hand(Participant::Computer);
                let card = index.checked_sub(1).and_then(|i| hand.get(i)).copied().ok_or(
                    EngineError::InvalidIndex {
                        index,
                        hand_size: hand.len(),
                    },
                )?;

                self.prompter.say(cards_line(hand))?;
                self.prompter.say(format!("Computer plays {card}"))?;
                Ok(Some(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, seed: u64) -> (SessionOutcome, String) {
        let mut session = Session::new(input.as_bytes(), Vec::new(), Some(seed));
        let outcome = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_exit_at_first_prompt() {
        let (outcome, output) = run("exit\n", 1);

        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert_eq!(output, "Indigo Card Game\nPlay first?\nGame Over\n");
    }

    #[test]
    fn test_first_prompt_repeats_on_bad_input() {
        let (outcome, output) = run("sure\nexit\n", 1);

        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert_eq!(output.matches("Play first?").count(), 2);
    }

    #[test]
    fn test_exit_at_card_prompt() {
        let (outcome, output) = run("yes\nexit\n", 1);

        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert!(output.contains("Initial cards on the table: "));
        assert!(output.contains("4 cards on the table, and the top card is "));
        assert!(output.contains("Cards in hand: 1)"));
        assert!(output.contains("Choose a card to play (1-6):"));
        assert!(!output.contains("Score:"));
        assert!(output.ends_with("Game Over\n"));
    }

    #[test]
    fn test_computer_leads_when_human_declines() {
        let (_, output) = run("no\nexit\n", 1);

        assert!(output.contains("Computer plays "));
        let computer_at = output.find("Computer plays ").unwrap();
        let prompt_at = output.find("Choose a card to play").unwrap();
        assert!(computer_at < prompt_at);
    }
}
