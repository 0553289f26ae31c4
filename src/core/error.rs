//! Error type shared by every part of the engine.
//!
//! All variants describe contract violations by the caller (unknown
//! difficulty, malformed range, wrong-phase call, bad configuration).
//! None of them occur in normal play behind a correctly wired front end.

use thiserror::Error;

use super::config::MAX_FACTOR;
use super::phase::PhaseKind;
use super::player::Player;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum DuelError {
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),

    #[error("invalid range: min {min} > max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("factor pool is empty")]
    EmptyFactorPool,

    #[error("factor {0} is not allowed; factors must be between 1 and {max}", max = MAX_FACTOR)]
    InvalidFactor(u32),

    #[error("operation requires phase {expected}, match is in {actual}")]
    InvalidPhase { expected: PhaseKind, actual: PhaseKind },

    #[error("transition for {player} applied while {active} is to play")]
    StaleTransition { player: Player, active: Player },

    #[error("transition does not fit the match: {0}")]
    InvalidTransition(String),

    #[error("choice index {index} out of range for {len} choices")]
    InvalidChoice { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("session has been closed")]
    SessionClosed,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DuelError>;
