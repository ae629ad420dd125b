//! The Board Model: an ordered sequence of columns, each owning an ordered
//! sequence of tasks.
//!
//! Every operation is synchronous and total. Unknown identifiers make an
//! operation a no-op and out-of-range indices are clamped, so after any call
//! each task sits in exactly one column, its `column_id` names that column,
//! and column indices stay contiguous.

use super::{
    BoardDocumentError, Column, ColumnColor, ColumnId, RemovedTask, Task, TaskDraft, TaskId, TaskMove,
    TaskPatch,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered columns of ordered tasks for a single project view.
///
/// Deserializing checks that column and task identifiers are unique and
/// that every task names the column holding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardDocument")]
pub struct Board {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct BoardDocument {
    columns: Vec<Column>,
}

impl TryFrom<BoardDocument> for Board {
    type Error = BoardDocumentError;

    fn try_from(document: BoardDocument) -> Result<Self, Self::Error> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for column in &document.columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardDocumentError::DuplicateColumn(column.id()));
            }
            if let Some(duplicate) = column.task_ids().find(|id| !task_ids.insert(*id)) {
                return Err(BoardDocumentError::DuplicateTask(duplicate));
            }
        }
        Ok(Self {
            columns: document.columns,
        })
    }
}

impl Board {
    /// Creates a board with no columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Creates a board seeded with "To Do", "In Progress" and "Done".
    #[must_use]
    pub fn with_default_columns() -> Self {
        let mut board = Self::new();
        board.add_column("To Do", ColumnColor::new("gray"));
        board.add_column("In Progress", ColumnColor::new("blue"));
        board.add_column("Done", ColumnColor::new("green"));
        board
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(Column::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns mutable access to a task for counter updates.
    ///
    /// Ownership and position can only change through [`Board::move_task`].
    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .find_map(|column| column.task_mut(task_id))
    }

    /// Returns the owning column and index of a task.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<(ColumnId, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .position_of(task_id)
                .map(|position| (column.id(), position))
        })
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Appends an empty column and returns its identifier.
    pub fn add_column(&mut self, title: impl Into<String>, color: ColumnColor) -> ColumnId {
        let column = Column::new(title, color);
        let column_id = column.id();
        self.columns.push(column);
        column_id
    }

    /// Renames a column. Returns `false` if the column is unknown.
    pub fn rename_column(&mut self, column_id: ColumnId, title: impl Into<String>) -> bool {
        self.column_mut(column_id)
            .map(|column| column.rename(title))
            .is_some()
    }

    /// Removes a column and discards the tasks it contained.
    ///
    /// Returns the discarded tasks in their former order, or `None` if the
    /// column is unknown.
    pub fn delete_column(&mut self, column_id: ColumnId) -> Option<Vec<Task>> {
        let index = self.column_index(column_id)?;
        let mut column = self.columns.remove(index);
        Some(column.take_tasks())
    }

    /// Appends a task built from `draft` to the end of a column.
    ///
    /// Returns `None` if the column is unknown.
    pub fn add_task(
        &mut self,
        column_id: ColumnId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Option<TaskId> {
        self.add_task_at(column_id, draft, usize::MAX, clock)
            .map(|(task_id, _)| task_id)
    }

    /// Inserts a task built from `draft` at `index`, clamped to
    /// `[0, column length]`.
    ///
    /// Returns the new identifier and the index it landed at, or `None` if
    /// the column is unknown.
    pub fn add_task_at(
        &mut self,
        column_id: ColumnId,
        draft: TaskDraft,
        index: usize,
        clock: &impl Clock,
    ) -> Option<(TaskId, usize)> {
        let column = self.column_mut(column_id)?;
        let task = Task::from_draft(draft, column_id, clock);
        let task_id = task.id();
        let position = column.insert_task(index, task);
        Some((task_id, position))
    }

    /// Moves a task to `target_index` in `target_column`.
    ///
    /// The index addresses the target sequence with the task already removed
    /// and is clamped to its length. Moving within one column is a reorder.
    /// Returns `None`, leaving the board untouched, when either identifier is
    /// unknown or the task would land where it already is.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        target_column: ColumnId,
        target_index: usize,
        clock: &impl Clock,
    ) -> Option<TaskMove> {
        let (from_column, from_position) = self.locate(task_id)?;
        let source_index = self.column_index(from_column)?;
        let target_slot = self.column_index(target_column)?;
        let target_len = self.columns.get(target_slot).map(Column::len)?;

        let available = if source_index == target_slot {
            target_len.saturating_sub(1)
        } else {
            target_len
        };
        let to_position = target_index.min(available);
        if source_index == target_slot && to_position == from_position {
            return None;
        }

        let mut task = self
            .columns
            .get_mut(source_index)
            .and_then(|column| column.remove_task(from_position))?;
        task.set_column(target_column);
        task.touch(clock);

        let target = self.columns.get_mut(target_slot)?;
        let landed = target.insert_task(to_position, task);

        Some(TaskMove {
            task_id,
            from_column,
            from_position,
            to_column: target_column,
            to_position: landed,
        })
    }

    /// Merges `patch` into a task without changing its position.
    ///
    /// Returns `false` if the task is unknown or the patch is empty.
    pub fn update_task(&mut self, task_id: TaskId, patch: &TaskPatch, clock: &impl Clock) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.task_mut(task_id)
            .map(|task| task.apply_patch(patch, clock))
            .is_some()
    }

    /// Removes a task from whichever column contains it.
    pub fn delete_task(&mut self, task_id: TaskId) -> Option<RemovedTask> {
        let (column_id, position) = self.locate(task_id)?;
        let task = self.column_mut(column_id)?.remove_task(position)?;
        Some(RemovedTask { task, position })
    }

    /// Drops every task for which `keep` returns `false`, preserving column
    /// identity and relative task order.
    pub(crate) fn retain_tasks(&mut self, mut keep: impl FnMut(&Task) -> bool) {
        for column in &mut self.columns {
            column.retain_tasks(&mut keep);
        }
    }

    fn column_index(&self, column_id: ColumnId) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.id() == column_id)
    }

    fn column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }
}
