//! The capture rule.

use crate::cards::Card;

/// A played card captures the table when it shares a suit or a rank with
/// the table's top card. An empty table is never captured.
#[must_use]
pub fn captures(played: Card, top: Option<Card>) -> bool {
    top.is_some_and(|top| played.matches(top))
}
