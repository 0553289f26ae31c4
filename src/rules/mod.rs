//! Duel rules: answer evaluation and the transitions it produces.
//!
//! The evaluator reads a [`MatchState`](crate::game::MatchState) and an
//! answer and returns a [`Transition`]. Applying the transition is the
//! match state's job.

pub mod evaluator;
pub mod transition;

pub use evaluator::evaluate;
pub use transition::Transition;
