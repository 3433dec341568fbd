//! The match engine.
//!
//! `Match` owns the `MatchState` for one game and is the only thing that
//! mutates it. Each call to [`Match::play`] runs one full turn for the
//! active participant:
//!
//! 1. remove the chosen card from the hand (1-based index)
//! 2. resolve it against the table's top card: capture the whole pile into
//!    the participant's ledger, or lay the card on the table
//! 3. refill an emptied hand with six cards while the deck lasts
//! 4. pass the turn to the other participant
//!
//! When both hands are empty the match is over and [`Match::finish`] hands
//! the leftover pile to the last capturer and produces the final score.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::capture::captures;
use super::scoring::Score;
use crate::cards::Card;
use crate::core::config::HAND_SIZE;
use crate::core::{
    EngineError, EngineResult, GameRng, MatchConfig, MatchState, Participant, ParticipantMap,
    PlayOutcome, TurnRecord,
};
use crate::opponent::{IndigoHeuristic, OpponentPolicy};
use crate::zones::Ledger;

/// Final result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Final score including the last-trick bonus.
    pub score: Score,

    /// Final capture ledgers.
    pub ledgers: ParticipantMap<Ledger>,

    /// Cards left on the table when the last hand ran out.
    pub remainder: Vec<Card>,

    /// Who received `remainder`. `None` when nobody ever captured, in which
    /// case the remainder is unclaimed and scores for nobody.
    pub remainder_to: Option<Participant>,

    /// Every play of the match, in order.
    pub history: Vec<TurnRecord>,

    /// Seed the match was dealt from.
    pub seed: u64,
}

/// A single match between the human and the computer.
#[derive(Clone, Debug)]
pub struct Match<P = IndigoHeuristic> {
    state: MatchState,
    policy: P,
    opponent_rng: GameRng,
    seed: u64,
}

impl Match<IndigoHeuristic> {
    /// Deal a new match played against the standard heuristic.
    pub fn new(config: &MatchConfig) -> EngineResult<Self> {
        Self::with_policy(config, IndigoHeuristic)
    }
}

impl<P: OpponentPolicy> Match<P> {
    /// Deal a new match whose suggested plays come from `policy`.
    pub fn with_policy(config: &MatchConfig, policy: P) -> EngineResult<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut shuffle_rng = rng.for_context("shuffle");
        let state = MatchState::deal(&mut shuffle_rng, config.first)?;

        info!(seed = rng.seed(), first = %config.first, "match started");

        Ok(Self {
            state,
            policy,
            opponent_rng: rng.for_context("opponent"),
            seed: rng.seed(),
        })
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active(&self) -> Participant {
        self.state.active
    }

    #[must_use]
    pub fn hand(&self, participant: Participant) -> &[Card] {
        self.state.hands[participant].cards()
    }

    /// The table's top card, `None` when the table is empty.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.state.table.top()
    }

    /// Both hands are empty. The deck is empty too at that point.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.hands_empty()
    }

    /// Points from captured cards so far, without the bonus.
    #[must_use]
    pub fn running_score(&self) -> Score {
        Score::running(&self.state.ledgers)
    }

    /// Ask the policy which card the active participant should play.
    ///
    /// Returns a 1-based index suitable for [`Match::play`].
    pub fn suggest_play(&mut self) -> EngineResult<usize> {
        if self.is_over() {
            return Err(EngineError::MatchOver);
        }

        let active = self.state.active;
        let top = self.state.table.top();
        self.policy
            .choose_card(self.state.hands[active].cards(), top, &mut self.opponent_rng)
            .ok_or(EngineError::EmptyHand(active))
    }

    /// Play the card at 1-based `index` from the active participant's hand.
    ///
    /// An `InvalidIndex` error leaves the match untouched.
    pub fn play(&mut self, index: usize) -> EngineResult<TurnRecord> {
        if self.is_over() {
            return Err(EngineError::MatchOver);
        }

        let participant = self.state.active;
        let card = self.state.hands[participant]
            .play(index)?
            .into_iter()
            .next()
            .ok_or(EngineError::EmptyHand(participant))?;

        let outcome = self.resolve(participant, card);
        let replenished = self.replenish(participant)?;

        let record = TurnRecord {
            turn: self.state.turn_number,
            participant,
            card,
            outcome,
            replenished,
        };
        self.state.history.push(record.clone());
        self.state.turn_number += 1;
        self.pass_turn();

        Ok(record)
    }

    /// End the match: the leftover pile goes to the last capturer and the
    /// final score is computed.
    pub fn finish(mut self) -> EngineResult<MatchReport> {
        if !self.is_over() {
            return Err(EngineError::MatchInProgress);
        }
        debug_assert!(self.state.deck.is_empty(), "deck must be empty when both hands are");

        let remainder = self.state.table.sweep();
        let remainder_to = self.state.last_capturer;
        match remainder_to {
            Some(winner) => self.state.ledgers[winner].absorb(remainder.iter().copied()),
            None => warn!(cards = remainder.len(), "match ended without a capture, table unclaimed"),
        }

        let score = Score::final_tally(&self.state.ledgers);
        info!(
            player = score.points[Participant::Human],
            computer = score.points[Participant::Computer],
            "match finished"
        );

        Ok(MatchReport {
            score,
            ledgers: self.state.ledgers,
            remainder,
            remainder_to,
            history: self.state.history,
            seed: self.seed,
        })
    }

    fn resolve(&mut self, participant: Participant, card: Card) -> PlayOutcome {
        let top = self.state.table.top();
        self.state.table.draw([card]);

        if !captures(card, top) {
            debug!(%participant, %card, table = self.state.table.len(), "card laid");
            return PlayOutcome::Laid;
        }

        let won = self.state.table.sweep();
        let cards = won.len();
        self.state.ledgers[participant].absorb(won);
        self.state.last_capturer = Some(participant);
        info!(%participant, %card, cards, "trick captured");

        PlayOutcome::Captured { cards }
    }

    fn replenish(&mut self, participant: Participant) -> EngineResult<bool> {
        if !self.state.hands[participant].is_empty() || self.state.deck.is_empty() {
            return Ok(false);
        }

        let cards = self.state.deck.play(HAND_SIZE)?;
        self.state.hands[participant].draw(cards);
        debug!(%participant, deck = self.state.deck.len(), "hand replenished");

        Ok(true)
    }

    /// Turns alternate. A participant left without cards is skipped while
    /// the other still holds some.
    fn pass_turn(&mut self) {
        let current = self.state.active;
        let next = current.opponent();
        if !self.state.hands[next].is_empty() || self.state.hands[current].is_empty() {
            self.state.active = next;
        }
    }
}
