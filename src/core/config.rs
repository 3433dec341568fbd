//! Rule constants and match configuration.
//!
//! The rules themselves are fixed: one 52-card deck, four cards seeded on
//! the table, six-card hands and a single three-point bonus. `MatchConfig`
//! only chooses who leads and how the randomness is seeded.

use serde::{Deserialize, Serialize};

use super::Participant;

/// Cards in the full universe.
pub const DECK_SIZE: usize = 52;

/// Cards dealt face-up to the table at the start of a match.
pub const STARTING_TABLE: usize = 4;

/// Cards dealt to a hand at the start and on every replenishment.
pub const HAND_SIZE: usize = 6;

/// Bonus for holding strictly more captured cards at the end of a match.
pub const LAST_TRICK_BONUS: u32 = 3;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the shuffle and the opponent. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Who plays the first card.
    pub first: Participant,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first: Participant::Human,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the human leading and an OS seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a fixed seed if one is given.
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set who plays first.
    #[must_use]
    pub fn with_first(mut self, first: Participant) -> Self {
        self.first = first;
        self
    }
}
