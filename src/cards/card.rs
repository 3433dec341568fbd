//! Playing cards: rank, suit and point value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit. Declaration order is the canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Suit::ALL.into_iter().find(|s| s.symbol() == ch)
    }
}

/// Card rank. Declaration order is the canonical deck order (ace low).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Aces, tens and face cards are worth a point each.
    #[must_use]
    pub const fn point(self) -> u32 {
        match self {
            Rank::Ace | Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 1,
            _ => 0,
        }
    }
}

/// A card of the 52-card deck. Cards are unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn point(self) -> u32 {
        self.rank.point()
    }

    /// Shares a suit or a rank with `other`.
    #[must_use]
    pub fn matches(self, other: Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Formats as `A♦`, `10♠`, `Q♣`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("card string is empty")]
    Empty,
    #[error("invalid rank: {0}")]
    InvalidRank(String),
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
}

/// Parses strings like `A♦`, `10♠`, `Q♣`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, _) = s.char_indices().last().ok_or(ParseCardError::Empty)?;
        let (rank_str, suit_str) = s.split_at(split);

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.label() == rank_str)
            .ok_or_else(|| ParseCardError::InvalidRank(rank_str.to_string()))?;
        let suit = Suit::from_symbol(suit_str)
            .ok_or_else(|| ParseCardError::InvalidSuit(suit_str.to_string()))?;

        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        let scoring = [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];
        for rank in Rank::ALL {
            let expected = u32::from(scoring.contains(&rank));
            assert_eq!(Card::new(rank, Suit::Hearts).point(), expected, "{rank}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).to_string(), "A♦");
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Q♣");
    }

    #[test]
    fn test_parse() {
        assert_eq!("10♥".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("7♦".parse::<Card>(), Ok(Card::new(Rank::Seven, Suit::Diamonds)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1♥".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "Kx".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
    }

    #[test]
    fn test_matches() {
        let ten_diamonds = Card::new(Rank::Ten, Suit::Diamonds);
        assert!(Card::new(Rank::Seven, Suit::Diamonds).matches(ten_diamonds));
        assert!(Card::new(Rank::Ten, Suit::Clubs).matches(ten_diamonds));
        assert!(!Card::new(Rank::King, Suit::Clubs).matches(ten_diamonds));
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(Rank::Jack, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
