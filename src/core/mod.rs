//! Core engine types: players, phases, track, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod track;

pub use config::MatchConfig;
pub use error::{DuelError, Result};
pub use phase::{Phase, PhaseKind};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState, RangeRng};
pub use track::{Movement, Track};
