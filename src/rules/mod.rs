//! Rules of play: capture resolution, scoring and the match engine.

pub mod capture;
pub mod engine;
pub mod scoring;

pub use capture::captures;
pub use engine::{Match, MatchReport};
pub use scoring::{bonus_holder, Score};
