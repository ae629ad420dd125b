//! Board columns: named, ordered buckets of tasks.

use super::{BoardDocumentError, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour tag rendered on the column header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnColor(String);

impl ColumnColor {
    /// Creates a colour tag from its display token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the colour token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColumnColor {
    fn default() -> Self {
        Self::new("gray")
    }
}

impl fmt::Display for ColumnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A column and the ordered sequence of tasks it owns.
///
/// The index of a task in [`Column::tasks`] is its position; there is no
/// separate ordinal field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnDocument")]
pub struct Column {
    id: ColumnId,
    title: String,
    color: ColumnColor,
    tasks: Vec<Task>,
}

/// Unchecked wire form of a [`Column`].
#[derive(Deserialize)]
struct ColumnDocument {
    id: ColumnId,
    title: String,
    color: ColumnColor,
    tasks: Vec<Task>,
}

impl TryFrom<ColumnDocument> for Column {
    type Error = BoardDocumentError;

    fn try_from(document: ColumnDocument) -> Result<Self, Self::Error> {
        let misplaced = document
            .tasks
            .iter()
            .find(|task| task.column_id() != document.id);
        if let Some(task) = misplaced {
            return Err(BoardDocumentError::OwnerMismatch {
                task_id: task.id(),
                column_id: document.id,
                claimed: task.column_id(),
            });
        }
        Ok(Self {
            id: document.id,
            title: document.title,
            color: document.color,
            tasks: document.tasks,
        })
    }
}

impl Column {
    pub(crate) fn new(title: impl Into<String>, color: ColumnColor) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            color,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the colour tag.
    #[must_use]
    pub const fn color(&self) -> &ColumnColor {
        &self.color
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(Task::id)
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of `task_id` within this column.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(crate) fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    /// Inserts `task` at `index`, clamped to the end of the sequence, and
    /// returns the index it landed at.
    pub(crate) fn insert_task(&mut self, index: usize, task: Task) -> usize {
        let position = index.min(self.tasks.len());
        self.tasks.insert(position, task);
        position
    }

    pub(crate) fn remove_task(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub(crate) fn retain_tasks(&mut self, keep: impl FnMut(&Task) -> bool) {
        self.tasks.retain(keep);
    }

    pub(crate) fn take_tasks(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.tasks)
    }
}
