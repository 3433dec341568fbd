//! Capture ledgers: the cards a participant has won.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Unordered bag of captured cards. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    cards: Vec<Card>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
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

    /// Sum of card points.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| c.point()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_and_points() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.points(), 0);

        ledger.absorb(["A♦", "2♣", "K♥"].iter().map(|s| s.parse::<Card>().unwrap()));
        ledger.absorb(["10♠".parse::<Card>().unwrap()]);

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.points(), 3);
    }
}
