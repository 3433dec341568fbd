//! The 52-card universe and the shuffled draw pile built from it.

use tracing::debug;

use super::card::{Card, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::GameRng;
use crate::zones::{Zone, ZoneKind};

/// All 52 cards in canonical order: suit-major (♦ ♥ ♠ ♣), rank-minor (A..K).
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Shuffle the universe into a fresh deck zone.
pub fn shuffled_deck(rng: &mut GameRng) -> Zone {
    let mut cards = build_deck();
    rng.shuffle(&mut cards);
    debug!(seed = rng.seed(), "deck shuffled");

    let mut deck = Zone::new(ZoneKind::Deck);
    deck.draw(cards);
    deck
}
