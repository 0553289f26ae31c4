//! Question generation.
//!
//! 1. Draw `a` and `b` independently from the factor pool (with
//!    replacement, so squares are common).
//! 2. Build the first distractor from an offset in `[-10, 10] \ {0}`
//!    that keeps the value positive.
//! 3. Build the second distractor from an offset in `[-20, 20] \ {0}`
//!    that keeps it positive and different from the first.
//! 4. Shuffle `{correct, d1, d2}` into the choice order.
//!
//! Distractors are sampled directly from the set of valid candidates,
//! so generation always terminates after a fixed number of draws.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::model::Question;
use crate::core::config::{
    DEFAULT_FIRST_DISTRACTOR_SPAN, DEFAULT_SECOND_DISTRACTOR_SPAN, MAX_DISTRACTOR_SPAN, MAX_FACTOR,
};
use crate::core::{DuelError, MatchConfig, RangeRng, Result};

/// Builds questions from a factor pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionGenerator {
    first_span: i64,
    second_span: i64,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self {
            first_span: DEFAULT_FIRST_DISTRACTOR_SPAN,
            second_span: DEFAULT_SECOND_DISTRACTOR_SPAN,
        }
    }
}

impl QuestionGenerator {
    /// Generator with the classic ±10 / ±20 distractor spans.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator using a configuration's distractor spans.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            first_span: config.first_distractor_span,
            second_span: config.second_distractor_span,
        }
    }

    /// Generate a question from `factors`.
    ///
    /// Fails with `EmptyFactorPool` for an empty pool and `InvalidFactor`
    /// if the pool contains 0 or a factor above `MAX_FACTOR`.
    pub fn generate<R: RangeRng>(&self, factors: &[u32], rng: &mut R) -> Result<Question> {
        if factors.is_empty() {
            return Err(DuelError::EmptyFactorPool);
        }
        if let Some(&bad) = factors.iter().find(|&&f| f == 0 || f > MAX_FACTOR) {
            return Err(DuelError::InvalidFactor(bad));
        }

        let a = *rng.pick(factors)?;
        let b = *rng.pick(factors)?;
        let correct = i64::from(a) * i64::from(b);

        let first = distractor(correct, self.first_span, None, rng)?;
        let second = distractor(correct, self.second_span, Some(first), rng)?;

        let mut choices = [correct, first, second];
        rng.shuffle(&mut choices)?;

        debug!("generated question {} x {} = {}, choices {:?}", a, b, correct, choices);
        Ok(Question::new(a, b, choices))
    }
}

/// Generate a question with the default distractor spans.
///
/// ```
/// use pacmath::core::GameRng;
/// use pacmath::question::generate;
///
/// let mut rng = GameRng::new(1);
/// let q = generate(&[7], &mut rng).unwrap();
/// assert_eq!(q.correct_answer(), 49);
/// assert!(q.choices().contains(&49));
/// ```
pub fn generate<R: RangeRng>(factors: &[u32], rng: &mut R) -> Result<Question> {
    QuestionGenerator::default().generate(factors, rng)
}

/// Pick `correct + delta` uniformly among offsets in `[-span, span] \ {0}`
/// that give a positive value other than `exclude`.
fn distractor<R: RangeRng>(
    correct: i64,
    span: i64,
    exclude: Option<i64>,
    rng: &mut R,
) -> Result<i64> {
    if span > MAX_DISTRACTOR_SPAN {
        return Err(DuelError::InvalidConfig(format!(
            "distractor span {span} exceeds {MAX_DISTRACTOR_SPAN}"
        )));
    }

    let candidates: SmallVec<[i64; 64]> = (-span..=span)
        .filter(|&delta| delta != 0)
        .map(|delta| correct + delta)
        .filter(|&value| value > 0 && Some(value) != exclude)
        .collect();

    if candidates.is_empty() {
        return Err(DuelError::InvalidConfig(format!(
            "no distractor candidates for {correct} within ±{span}"
        )));
    }
    Ok(*rng.pick(&candidates)?)
}
