//! Multiplication table shown as a hint next to the board.
//!
//! Purely derived data: products `i * j` for `i, j` in `0..=9`, with the
//! cell matching the current question highlighted.

use super::model::Question;

/// Largest factor shown in the table.
pub const TABLE_MAX_FACTOR: u32 = 9;

/// One rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableCell {
    pub row: u32,
    pub col: u32,
    pub product: u32,
    pub highlighted: bool,
}

/// The 10 × 10 multiplication table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MultiplicationTable;

impl MultiplicationTable {
    /// Product at `(row, col)`, or `None` outside `0..=9`.
    #[must_use]
    pub fn product(&self, row: u32, col: u32) -> Option<u32> {
        (row <= TABLE_MAX_FACTOR && col <= TABLE_MAX_FACTOR).then(|| row * col)
    }

    /// Check whether `(row, col)` is the current question's cell.
    #[must_use]
    pub fn is_highlighted(&self, row: u32, col: u32, question: Option<&Question>) -> bool {
        question.is_some_and(|q| q.involves(row, col))
    }

    /// Cells in row-major order.
    pub fn cells<'a>(&self, question: Option<&'a Question>) -> impl Iterator<Item = TableCell> + 'a {
        (0..=TABLE_MAX_FACTOR).flat_map(move |row| {
            (0..=TABLE_MAX_FACTOR).map(move |col| TableCell {
                row,
                col,
                product: row * col,
                highlighted: question.is_some_and(|q| q.involves(row, col)),
            })
        })
    }
}
