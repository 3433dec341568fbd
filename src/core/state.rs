//! Match state: every card location plus turn bookkeeping.
//!
//! `MatchState` is created once by the opening deal, mutated only by the
//! match engine, and dropped when the match ends. Each of the 52 cards is
//! always in exactly one of: the deck, a hand, the table, a ledger.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::TurnRecord;
use super::config::{HAND_SIZE, STARTING_TABLE};
use super::error::EngineResult;
use super::participant::{Participant, ParticipantMap};
use super::rng::GameRng;
use crate::cards::{shuffled_deck, Card};
use crate::zones::{Ledger, Zone, ZoneKind};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Remaining draw pile.
    pub deck: Zone,

    pub hands: ParticipantMap<Zone>,

    /// Shared face-up pile.
    pub table: Zone,

    pub ledgers: ParticipantMap<Ledger>,

    /// Whoever captured most recently. `None` until the first capture.
    pub last_capturer: Option<Participant>,

    /// Whose turn it is.
    pub active: Participant,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    pub history: Vec<TurnRecord>,
}

impl MatchState {
    /// Shuffle the universe and deal 4 cards to the table, then 6 to the
    /// human, then 6 to the computer.
    pub fn deal(rng: &mut GameRng, first: Participant) -> EngineResult<Self> {
        let mut deck = shuffled_deck(rng);

        let table = Zone::with_cards(ZoneKind::Table, deck.play(STARTING_TABLE)?);
        let human = deck.play(HAND_SIZE)?;
        let computer = deck.play(HAND_SIZE)?;
        let mut hands = ParticipantMap::new(|p| Zone::new(ZoneKind::Hand(p)));
        hands[Participant::Human].draw(human);
        hands[Participant::Computer].draw(computer);

        debug!(deck = deck.len(), ?first, "opening cards dealt");

        Ok(Self {
            deck,
            hands,
            table,
            ledgers: ParticipantMap::with_default(),
            last_capturer: None,
            active: first,
            turn_number: 1,
            history: Vec::new(),
        })
    }

    /// Both hands are empty.
    #[must_use]
    pub fn hands_empty(&self) -> bool {
        Participant::ALL.iter().all(|&p| self.hands[p].is_empty())
    }

    /// Every card in the match, from every location.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(crate::core::config::DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.table.cards());
        for p in Participant::ALL {
            cards.extend_from_slice(self.hands[p].cards());
            cards.extend_from_slice(self.ledgers[p].cards());
        }
        cards
    }
}
