//! Card model and deck construction.
//!
//! - `Card`: immutable rank/suit pair with a derived point value
//! - `build_deck`: the 52-card universe in canonical order

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{build_deck, shuffled_deck};
