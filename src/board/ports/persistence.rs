//! Persistence Adapter port: where committed task mutations are stored.
//!
//! Positions cross this boundary as explicit zero-based integers; inside the
//! board they are implied by sequence order.

use crate::board::domain::{AssigneeId, ColumnId, Priority, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence adapter calls.
pub type TaskPersistenceResult<T> = Result<T, TaskPersistenceError>;

/// Payload for storing a newly created task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskRecord {
    /// Identifier assigned by the board.
    pub task_id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning column.
    pub column_id: ColumnId,
    /// Optional assignee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<AssigneeId>,
    /// Priority.
    pub priority: Priority,
    /// Optional due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Labels.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub labels: BTreeSet<String>,
    /// Index within the owning column.
    pub position: usize,
}

impl CreateTaskRecord {
    /// Builds the payload for `task` sitting at `position`.
    #[must_use]
    pub fn from_task(task: &Task, position: usize) -> Self {
        Self {
            task_id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            column_id: task.column_id(),
            assignee_id: task.assignee(),
            priority: task.priority(),
            due_date: task.due_date(),
            labels: task.labels().clone(),
            position,
        }
    }
}

/// Payload for a partial task update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskRecord {
    /// Task being edited.
    pub task_id: TaskId,
    /// Fields to merge.
    pub patch: TaskPatch,
}

/// Payload for relocating a task.
///
/// Applying the same record twice leaves the store as applying it once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveTaskRecord {
    /// Task being moved.
    pub task_id: TaskId,
    /// Target column.
    pub column_id: ColumnId,
    /// Index in the target column after the move.
    pub position: usize,
}

/// Payload for deleting a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteTaskRecord {
    /// Task being deleted.
    pub task_id: TaskId,
}

/// Durable storage for committed task mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskPersistence: Send + Sync {
    /// Stores a newly created task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::DuplicateTask`] if the identifier is
    /// already stored.
    async fn create_task(&self, record: &CreateTaskRecord) -> TaskPersistenceResult<()>;

    /// Merges a partial update into a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::NotFound`] if the task is not stored.
    async fn update_task(&self, record: &UpdateTaskRecord) -> TaskPersistenceResult<()>;

    /// Moves a stored task to a column and position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::NotFound`] if the task is not stored.
    async fn move_task(&self, record: &MoveTaskRecord) -> TaskPersistenceResult<()>;

    /// Deletes a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::NotFound`] if the task is not stored.
    async fn delete_task(&self, record: &DeleteTaskRecord) -> TaskPersistenceResult<()>;
}

/// Errors returned by persistence adapters.
#[derive(Debug, Clone, Error)]
pub enum TaskPersistenceError {
    /// A task with the same identifier is already stored.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task is not stored.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskPersistenceError {
    /// Wraps a storage error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
