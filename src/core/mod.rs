//! Core engine types: participants, state, turn records, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod participant;
pub mod rng;
pub mod state;

pub use action::{PlayOutcome, TurnRecord};
pub use config::MatchConfig;
pub use error::{EngineError, EngineResult};
pub use participant::{Participant, ParticipantMap};
pub use rng::GameRng;
pub use state::MatchState;
