//! Engine errors.

use thiserror::Error;

use super::Participant;

/// Errors raised by the match engine.
///
/// `InvalidIndex` is recoverable (the console re-prompts). `InsufficientCards`
/// means the deck invariant was broken and the match cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("card index {index} is out of range 1-{hand_size}")]
    InvalidIndex { index: usize, hand_size: usize },

    #[error("cannot deal {requested} cards, only {remaining} left")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("{0} has no cards to play")]
    EmptyHand(Participant),

    #[error("the match is already over")]
    MatchOver,

    #[error("the match is still in progress")]
    MatchInProgress,
}

impl EngineError {
    /// Whether the caller may retry with different input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidIndex { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
