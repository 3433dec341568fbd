//! Card locations.
//!
//! Every card of a match sits in exactly one place: the deck, a hand, the
//! table, or a participant's capture ledger.

pub mod ledger;
pub mod zone;

pub use ledger::Ledger;
pub use zone::{Zone, ZoneKind};
