//! # pacmath
//!
//! A two-player multiplication duel on a linear track.
//!
//! Players share one token that starts at the center of an odd-length
//! track. Each turn the active player answers a multiplication question.
//! A first-try correct answer pushes the token toward that player's goal
//! end; a wrong one earns a single second chance. Reaching the win streak,
//! or pushing the token onto a boundary cell, wins the match.
//!
//! ## Design
//!
//! - **Pure evaluation**: `rules::evaluate` decides what an answer does
//!   and returns a `Transition`; `MatchState::apply` performs it.
//! - **Injected randomness**: every random draw goes through the
//!   `RangeRng` trait, so tests can script draws and sessions can replay
//!   a seeded stream.
//! - **Persistent data structures**: consumed track cells and session
//!   history use `im-rs`, so snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: players, phases, track, RNG, configuration and errors
//! - `difficulty`: factor pools and the difficulty registry
//! - `question`: question model, generator and multiplication table
//! - `rules`: answer evaluation and transitions
//! - `game`: match state, feedback and the event-driven session

pub mod core;
pub mod difficulty;
pub mod game;
pub mod question;
pub mod rules;

pub use crate::core::{
    DuelError, GameRng, GameRngState, MatchConfig, Movement, Phase, PhaseKind, Player,
    PlayerPair, RangeRng, Result, Track,
};

pub use crate::difficulty::{Difficulty, DifficultyRegistry, FactorPool};

pub use crate::question::{generate, MultiplicationTable, Question, QuestionGenerator};

pub use crate::rules::{evaluate, Transition};

pub use crate::game::{Event, EventOutcome, Feedback, MatchState, Session, TransitionRecord};
