//! Card piles: the deck, the two hands and the table.
//!
//! Every pile is a `Zone` tagged with a closed `ZoneKind`. All kinds share
//! `draw` (append to the end) and `play` (remove from the pile), but what
//! `play` removes depends on the kind:
//!
//! | Kind | `play(n)` |
//! |------|-----------|
//! | `Deck` | the first `n` cards, in draw order |
//! | `Hand` | the single card at 1-based position `n` |
//! | `Table` | the first `n` cards, oldest first |
//!
//! The top of a zone is its most recently appended card.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EngineError, EngineResult, Participant};

/// Role of a card pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Face-down draw pile.
    Deck,
    /// A participant's hand.
    Hand(Participant),
    /// The shared face-up pile.
    Table,
}

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    kind: ZoneKind,
    cards: Vec<Card>,
}

impl Zone {
    #[must_use]
    pub fn new(kind: ZoneKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// Create a zone holding `cards` in the given order.
    #[must_use]
    pub fn with_cards(kind: ZoneKind, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut zone = Self::new(kind);
        zone.draw(cards);
        zone
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Most recently appended card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Append cards to the end of the pile.
    pub fn draw(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove cards from the pile according to its kind.
    ///
    /// Nothing is removed when an error is returned.
    pub fn play(&mut self, n: usize) -> EngineResult<Vec<Card>> {
        match self.kind {
            ZoneKind::Deck | ZoneKind::Table => {
                if n > self.cards.len() {
                    return Err(EngineError::InsufficientCards {
                        requested: n,
                        remaining: self.cards.len(),
                    });
                }
                Ok(self.cards.drain(..n).collect())
            }
            ZoneKind::Hand(_) => {
                if n == 0 || n > self.cards.len() {
                    return Err(EngineError::InvalidIndex {
                        index: n,
                        hand_size: self.cards.len(),
                    });
                }
                Ok(vec![self.cards.remove(n - 1)])
            }
        }
    }

    /// Remove every card, oldest first.
    pub fn sweep(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
