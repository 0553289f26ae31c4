//! Multiple-choice multiplication question.

use serde::{Deserialize, Serialize};

use crate::core::{DuelError, Result};

/// Number of answer choices offered per question.
pub const CHOICE_COUNT: usize = 3;

/// A multiplication question with three shuffled choices.
///
/// Invariants (upheld by the generator): `correct_answer == a * b`, the
/// correct answer is one of the choices, and all choices are distinct
/// and positive. A question is replaced, never mutated, between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    a: u32,
    b: u32,
    correct_answer: i64,
    choices: [i64; CHOICE_COUNT],
}

impl Question {
    pub(crate) fn new(a: u32, b: u32, choices: [i64; CHOICE_COUNT]) -> Self {
        Self {
            a,
            b,
            correct_answer: i64::from(a) * i64::from(b),
            choices,
        }
    }

    /// First factor.
    #[must_use]
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Second factor.
    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    /// The product.
    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> &[i64; CHOICE_COUNT] {
        &self.choices
    }

    /// Value of the choice at `index`.
    ///
    /// Fails with `InvalidChoice` for an index outside the choices.
    pub fn choice(&self, index: usize) -> Result<i64> {
        self.choices
            .get(index)
            .copied()
            .ok_or(DuelError::InvalidChoice {
                index,
                len: CHOICE_COUNT,
            })
    }

    /// Position of the correct answer among the choices.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.choices.iter().position(|&c| c == self.correct_answer)
    }

    /// Check a submitted answer.
    #[must_use]
    pub fn is_correct(&self, answer: i64) -> bool {
        answer == self.correct_answer
    }

    /// Check whether this question asks for `i × j` in either order.
    #[must_use]
    pub fn involves(&self, i: u32, j: u32) -> bool {
        (self.a == i && self.b == j) || (self.a == j && self.b == i)
    }

    /// Prompt addressed to a player, e.g. `"Ana, what is 7 × 8?"`.
    #[must_use]
    pub fn prompt(&self, player_name: &str) -> String {
        format!("{}, what is {} × {}?", player_name, self.a, self.b)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.a, self.b)
    }
}
