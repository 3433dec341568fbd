//! Card selection for the computer participant.
//!
//! 1. Candidates: cards sharing the top card's suit. With fewer than two
//!    of those, cards sharing its rank are added as well.
//! 2. Any candidate means a capture is available: pick one at random.
//! 3. Otherwise pick at random among "similar" cards: every card whose suit
//!    occurs more than once in the hand; failing that, every card whose rank
//!    occurs more than once; failing that, the whole hand.
//!
//! No lookahead and no opponent modelling.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

use super::OpponentPolicy;
use crate::cards::Card;
use crate::core::config::HAND_SIZE;
use crate::core::GameRng;

/// 0-based positions into a hand.
pub type Positions = SmallVec<[usize; HAND_SIZE]>;

/// The heuristic the computer plays with.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndigoHeuristic;

impl OpponentPolicy for IndigoHeuristic {
    fn choose_card(&self, hand: &[Card], top: Option<Card>, rng: &mut GameRng) -> Option<usize> {
        let candidates = candidate_cards(hand, top);
        let pool = if candidates.is_empty() {
            similar_cards(hand)
        } else {
            candidates
        };

        rng.choose(&pool).map(|&pos| pos + 1)
    }
}

/// Positions of cards that would capture `top`.
#[must_use]
pub fn candidate_cards(hand: &[Card], top: Option<Card>) -> Positions {
    let Some(top) = top else {
        return Positions::new();
    };

    let mut positions: Positions = hand
        .iter()
        .enumerate()
        .filter(|(_, c)| c.suit == top.suit)
        .map(|(i, _)| i)
        .collect();

    if positions.len() < 2 {
        for (i, c) in hand.iter().enumerate() {
            if c.rank == top.rank && !positions.contains(&i) {
                positions.push(i);
            }
        }
    }

    positions
}

/// Positions of cards to shed when no capture is available.
#[must_use]
pub fn similar_cards(hand: &[Card]) -> Positions {
    let by_suit = grouped_positions(hand, |c| c.suit);
    if !by_suit.is_empty() {
        return by_suit;
    }

    let by_rank = grouped_positions(hand, |c| c.rank);
    if !by_rank.is_empty() {
        return by_rank;
    }

    (0..hand.len()).collect()
}

/// Positions of cards whose key is shared with at least one other card.
fn grouped_positions<K: Eq + Hash>(hand: &[Card], key: impl Fn(&Card) -> K) -> Positions {
    let mut counts: FxHashMap<K, usize> = FxHashMap::default();
    for card in hand {
        *counts.entry(key(card)).or_default() += 1;
    }

    hand.iter()
        .enumerate()
        .filter(|(_, c)| counts.get(&key(*c)).is_some_and(|&n| n > 1))
        .map(|(i, _)| i)
        .collect()
}
