//! Error types for board domain parsing.
//!
//! Board Model operations themselves are total and never fail; the only
//! fallible surface in the domain is turning external strings and documents
//! into values.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Error returned while parsing a task priority from its storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned when a deserialized board document would break board
/// ownership rules.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardDocumentError {
    /// A task appears more than once across the board.
    #[error("task {0} appears more than once")]
    DuplicateTask(TaskId),
    /// Two columns share an identifier.
    #[error("column {0} appears more than once")]
    DuplicateColumn(ColumnId),
    /// A task names a different owning column than the one holding it.
    #[error("task {task_id} is held by column {column_id} but names {claimed}")]
    OwnerMismatch {
        /// Task identifier.
        task_id: TaskId,
        /// Column holding the task.
        column_id: ColumnId,
        /// Column named by the task.
        claimed: ColumnId,
    },
}
