//! Factor pools: the numbers questions are built from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::MAX_FACTOR;
use crate::core::{DuelError, Result};

/// Non-empty, sorted, duplicate-free set of positive factors.
///
/// SmallVec keeps the preset pools (at most nine factors) inline.
///
/// ```
/// use pacmath::difficulty::FactorPool;
///
/// let pool = FactorPool::new([3, 1, 2, 3]).unwrap();
/// assert_eq!(pool.as_slice(), &[1, 2, 3]);
///
/// assert!(FactorPool::new([]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct FactorPool {
    factors: SmallVec<[u32; 9]>,
}

impl FactorPool {
    /// Build a pool, rejecting empty input and factors outside `1..=MAX_FACTOR`.
    pub fn new(factors: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut factors: SmallVec<[u32; 9]> = factors.into_iter().collect();
        if factors.is_empty() {
            return Err(DuelError::EmptyFactorPool);
        }
        if let Some(&bad) = factors.iter().find(|&&f| f == 0 || f > MAX_FACTOR) {
            return Err(DuelError::InvalidFactor(bad));
        }
        factors.sort_unstable();
        factors.dedup();
        Ok(Self { factors })
    }

    /// Pool from a list that is already sorted, duplicate-free and in range.
    pub(crate) fn from_sorted(factors: &[u32]) -> Self {
        debug_assert!(factors.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(factors.iter().all(|&f| (1..=MAX_FACTOR).contains(&f)));
        Self {
            factors: SmallVec::from_slice(factors),
        }
    }

    /// Pool containing every factor in `lo..=hi`.
    pub fn range(lo: u32, hi: u32) -> Result<Self> {
        Self::new(lo..=hi)
    }

    /// Factors in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.factors
    }

    /// Number of distinct factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Check whether a factor belongs to the pool.
    #[must_use]
    pub fn contains(&self, factor: u32) -> bool {
        self.factors.binary_search(&factor).is_ok()
    }

    /// Smallest factor.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.factors[0]
    }

    /// Largest factor.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.factors[self.factors.len() - 1]
    }
}

impl TryFrom<Vec<u32>> for FactorPool {
    type Error = DuelError;

    fn try_from(value: Vec<u32>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FactorPool> for Vec<u32> {
    fn from(pool: FactorPool) -> Self {
        pool.factors.into_vec()
    }
}
