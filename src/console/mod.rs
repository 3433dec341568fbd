//! Console shell around the match engine.
//!
//! - `prompt`: reading and validating replies
//! - `render`: text for piles and scores
//! - `session`: the game loop as seen at the terminal

pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::{parse_card_index, parse_play_first, Prompter, Reply};
pub use session::{Session, SessionError, SessionOutcome};
