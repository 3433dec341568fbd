//! Turn history entries.
//!
//! Every resolved play is recorded as a `TurnRecord`: who played, which
//! card, and whether it captured the table.

use serde::{Deserialize, Serialize};

use super::participant::Participant;
use crate::cards::Card;

/// Result of resolving a single play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The card was laid on the table.
    Laid,
    /// The card captured the table; `cards` includes the played card.
    Captured { cards: usize },
}

impl PlayOutcome {
    #[must_use]
    pub fn is_capture(self) -> bool {
        matches!(self, PlayOutcome::Captured { .. })
    }
}

/// A resolved play in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// Who played.
    pub participant: Participant,
    /// The card played.
    pub card: Card,
    /// What happened to it.
    pub outcome: PlayOutcome,
    /// Whether the participant's hand was refilled from the deck afterwards.
    pub replenished: bool,
}

impl TurnRecord {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.outcome.is_capture()
    }
}
