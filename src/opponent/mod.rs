//! Automated opponent.
//!
//! Policies are trait-based so the engine can be driven by any card
//! selector. `IndigoHeuristic` is the one the computer plays with.

pub mod heuristic;

pub use heuristic::{candidate_cards, similar_cards, IndigoHeuristic, Positions};

use crate::cards::Card;
use crate::core::GameRng;

/// Chooses which card to play from a hand.
pub trait OpponentPolicy {
    /// Return the 1-based position of the card to play, or `None` for an
    /// empty hand. `top` is the table's top card, `None` on an empty table.
    ///
    /// The choice is returned, never stored: the policy holds no state
    /// between calls.
    fn choose_card(&self, hand: &[Card], top: Option<Card>, rng: &mut GameRng) -> Option<usize>;
}
