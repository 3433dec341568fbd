//! # indigo
//!
//! Engine for the two-player trick-capturing card game Indigo: a human
//! plays against a heuristic computer opponent over a shared face-up pile.
//!
//! ## Rules in brief
//!
//! - 52-card deck; 4 cards to the table, 6 to each hand.
//! - A played card that shares the suit or rank of the table's top card
//!   captures the whole table.
//! - Emptied hands are refilled with 6 cards while the deck lasts.
//! - When both hands are empty the leftover table goes to the last capturer.
//!   Aces, tens and face cards score 1 point; holding more cards scores 3.
//!
//! ## Modules
//!
//! - `core`: participants, match state, turn records, RNG, configuration, errors
//! - `cards`: card model and the 52-card deck
//! - `zones`: deck, hands, table and capture ledgers
//! - `rules`: capture rule, scoring and the `Match` engine
//! - `opponent`: `OpponentPolicy` trait and the computer's heuristic
//! - `console`: line-based I/O shell used by the `indigo` binary

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod opponent;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameRng, MatchConfig, MatchState, Participant, ParticipantMap,
    PlayOutcome, TurnRecord,
};

pub use crate::cards::{build_deck, Card, Rank, Suit};

pub use crate::zones::{Ledger, Zone, ZoneKind};

pub use crate::rules::{captures, Match, MatchReport, Score};

pub use crate::opponent::{IndigoHeuristic, OpponentPolicy};

pub use crate::console::{Session, SessionError, SessionOutcome};
