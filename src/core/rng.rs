//! Random number generation for factor draws, distractors and shuffles.
//!
//! ## Key Features
//!
//! - **Injectable**: question generation only depends on the [`RangeRng`]
//!   trait, so tests can drive it with a scripted source
//! - **Deterministic**: same seed produces the identical question sequence
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! ```
//! use pacmath::core::{GameRng, RangeRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.int_in_range(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! assert!(rng.int_in_range(6, 1).is_err());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{DuelError, Result};

/// Source of uniformly distributed integers over an inclusive range.
pub trait RangeRng {
    /// Draw an integer uniformly from `[min, max]`.
    ///
    /// Fails with `InvalidRange` when `min > max`.
    fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64>;

    /// Draw an index uniformly from `0..len`.
    ///
    /// Fails with `InvalidRange` when `len == 0`.
    fn index_below(&mut self, len: usize) -> Result<usize> {
        let max = len as i64 - 1;
        let idx = self.int_in_range(0, max)?;
        Ok(idx as usize)
    }

    /// Pick one element of a slice uniformly.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T>
    where
        Self: Sized,
    {
        let idx = self.index_below(items.len())?;
        Ok(&items[idx])
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()>
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Seeded ChaCha8 RNG used by live sessions.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The seed is still recorded, so the stream can be captured with
    /// [`GameRng::state`] and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RangeRng for GameRng {
    fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(DuelError::InvalidRange { min, max });
        }
        Ok(self.inner.gen_range(min..=max))
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        use rand::seq::SliceRandom;
        items
            .choose(&mut self.inner)
            .ok_or(DuelError::InvalidRange { min: 0, max: -1 })
    }

    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
        Ok(())
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
