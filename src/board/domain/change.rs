//! Records describing committed Board Model mutations.

use super::{ColumnId, TaskId, TaskPatch};
use serde::Serialize;

/// A completed task relocation.
///
/// Positions are zero-based indices into the column sequences: `from_position`
/// before the move and `to_position` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskMove {
    /// The task that moved.
    pub task_id: TaskId,
    /// Column that held the task before the move.
    pub from_column: ColumnId,
    /// Index in the source column before the move.
    pub from_position: usize,
    /// Column that holds the task after the move.
    pub to_column: ColumnId,
    /// Index in the target column after the move.
    pub to_position: usize,
}

impl TaskMove {
    /// Returns `true` when the task stayed in the same column.
    #[must_use]
    pub fn is_reorder(&self) -> bool {
        self.from_column == self.to_column
    }
}

/// A task removed from the board together with where it used to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    /// The removed task record.
    pub task: super::Task,
    /// Index the task occupied before removal.
    pub position: usize,
}

/// Notification emitted for every committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardChange {
    /// A column was appended to the board.
    ColumnAdded {
        /// The new column.
        column_id: ColumnId,
    },
    /// A column title changed.
    ColumnRenamed {
        /// The renamed column.
        column_id: ColumnId,
        /// Its new title.
        title: String,
    },
    /// A column was removed along with every task it held.
    ColumnDeleted {
        /// The removed column.
        column_id: ColumnId,
        /// Tasks discarded with it, in their former order.
        discarded: Vec<TaskId>,
    },
    /// A task was created.
    TaskAdded {
        /// The new task.
        task_id: TaskId,
        /// Column that received it.
        column_id: ColumnId,
        /// Index it was inserted at.
        position: usize,
    },
    /// A task changed column or position.
    TaskMoved(TaskMove),
    /// Editable task fields changed.
    TaskUpdated {
        /// The edited task.
        task_id: TaskId,
        /// Fields that were merged.
        patch: TaskPatch,
    },
    /// A comment or attachment was recorded on a task card. The counters
    /// are local to the board and never reach the persistence adapter.
    TaskCountersChanged {
        /// The task whose counters changed.
        task_id: TaskId,
        /// Comment count after the change.
        comment_count: u32,
        /// Attachment count after the change.
        attachment_count: u32,
    },
    /// A task was deleted.
    TaskDeleted {
        /// The deleted task.
        task_id: TaskId,
        /// Column that held it.
        column_id: ColumnId,
        /// Index it occupied.
        position: usize,
    },
}
