//! Difficulty levels and the factor pools they select.

pub mod pool;
pub mod registry;

pub use pool::FactorPool;
pub use registry::{Difficulty, DifficultyRegistry, PRESETS};
