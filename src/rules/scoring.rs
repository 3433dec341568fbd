//! Scoring: card points plus the last-trick bonus.

use serde::{Deserialize, Serialize};

use crate::core::config::LAST_TRICK_BONUS;
use crate::core::{Participant, ParticipantMap};
use crate::zones::Ledger;

/// Point and card totals for both participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: ParticipantMap<u32>,
    pub cards: ParticipantMap<usize>,
}

impl Score {
    /// Points from captured cards only, as shown after each capture.
    #[must_use]
    pub fn running(ledgers: &ParticipantMap<Ledger>) -> Self {
        Self {
            points: ledgers.map(|_, l| l.points()),
            cards: ledgers.map(|_, l| l.len()),
        }
    }

    /// Points from captured cards plus the bonus for the larger ledger.
    #[must_use]
    pub fn final_tally(ledgers: &ParticipantMap<Ledger>) -> Self {
        let mut score = Self::running(ledgers);
        if let Some(holder) = bonus_holder(ledgers) {
            score.points[holder] += LAST_TRICK_BONUS;
        }
        score
    }
}

/// The participant holding strictly more captured cards, if any.
#[must_use]
pub fn bonus_holder(ledgers: &ParticipantMap<Ledger>) -> Option<Participant> {
    let human = ledgers[Participant::Human].len();
    let computer = ledgers[Participant::Computer].len();
    match human.cmp(&computer) {
        std::cmp::Ordering::Greater => Some(Participant::Human),
        std::cmp::Ordering::Less => Some(Participant::Computer),
        std::cmp::Ordering::Equal => None,
    }
}
