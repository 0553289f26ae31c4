//! Difficulty registry for factor pool lookup.
//!
//! The `DifficultyRegistry` maps a difficulty identifier (the menu key,
//! `"1"` to `"4"` for the presets) to a labelled factor pool.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pool::FactorPool;
use crate::core::{DuelError, Result};

/// Preset levels: id, menu label, factors.
pub const PRESETS: [(&str, &str, &[u32]); 4] = [
    ("1", "Easy (1, 2, 3)", &[1, 2, 3]),
    ("2", "Medium (1 to 6)", &[1, 2, 3, 4, 5, 6]),
    ("3", "Hard (1 to 9)", &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ("4", "Special (7, 8, 9)", &[7, 8, 9]),
];

/// A selectable difficulty level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Lookup key.
    pub id: String,
    /// Menu label.
    pub label: String,
    /// Factors questions are drawn from.
    pub factors: FactorPool,
}

impl Difficulty {
    /// Create a difficulty level.
    pub fn new(id: impl Into<String>, label: impl Into<String>, factors: FactorPool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            factors,
        }
    }
}

/// Registry of difficulty levels.
///
/// ## Example
///
/// ```
/// use pacmath::difficulty::DifficultyRegistry;
///
/// let registry = DifficultyRegistry::standard();
/// let pool = registry.factors_for("4").unwrap();
/// assert_eq!(pool.as_slice(), &[7, 8, 9]);
///
/// assert!(registry.factors_for("5").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DifficultyRegistry {
    levels: FxHashMap<String, Difficulty>,
}

impl DifficultyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four preset levels.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (id, label, factors) in PRESETS {
            registry.register(Difficulty::new(id, label, FactorPool::from_sorted(factors)));
        }
        registry
    }

    /// Register a level, replacing any level with the same id.
    ///
    /// Returns the replaced level, if any.
    pub fn register(&mut self, difficulty: Difficulty) -> Option<Difficulty> {
        self.levels.insert(difficulty.id.clone(), difficulty)
    }

    /// Register a level from raw factors.
    ///
    /// Fails with `EmptyFactorPool` or `InvalidFactor` for bad pools.
    pub fn register_factors(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        factors: impl IntoIterator<Item = u32>,
    ) -> Result<()> {
        let pool = FactorPool::new(factors)?;
        self.register(Difficulty::new(id, label, pool));
        Ok(())
    }

    /// Get a level by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Difficulty> {
        self.levels.get(id)
    }

    /// Factor pool for a level.
    ///
    /// Fails with `UnknownDifficulty` if `id` is not registered.
    pub fn factors_for(&self, id: &str) -> Result<&FactorPool> {
        self.levels
            .get(id)
            .map(|d| &d.factors)
            .ok_or_else(|| DuelError::UnknownDifficulty(id.to_string()))
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.levels.contains_key(id)
    }

    /// Number of registered levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// All levels sorted by id, for a selection menu.
    #[must_use]
    pub fn levels(&self) -> Vec<&Difficulty> {
        let mut levels: Vec<_> = self.levels.values().collect();
        levels.sort_by(|a, b| a.id.cmp(&b.id));
        levels
    }
}
