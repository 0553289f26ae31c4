//! Questions: the model, the generator and the table hint.

pub mod generator;
pub mod model;
pub mod table;

pub use generator::{generate, QuestionGenerator};
pub use model::{Question, CHOICE_COUNT};
pub use table::{MultiplicationTable, TableCell, TABLE_MAX_FACTOR};
