//! In-memory persistence adapter keeping explicit task positions.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{AssigneeId, ColumnId, Priority, TaskId},
    ports::{
        CreateTaskRecord, DeleteTaskRecord, MoveTaskRecord, TaskPersistence,
        TaskPersistenceError, TaskPersistenceResult, UpdateTaskRecord,
    },
};

/// A task as the store sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTask {
    /// Task identifier.
    pub task_id: TaskId,
    /// Owning column.
    pub column_id: ColumnId,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee_id: Option<AssigneeId>,
    /// Priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Labels.
    pub labels: BTreeSet<String>,
}

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    tasks: HashMap<TaskId, StoredTask>,
    column_order: HashMap<ColumnId, Vec<TaskId>>,
}

impl InMemoryStoreState {
    fn unlink(&mut self, task_id: TaskId, column_id: ColumnId) {
        if let Some(ids) = self.column_order.get_mut(&column_id) {
            ids.retain(|id| *id != task_id);
            if ids.is_empty() {
                self.column_order.remove(&column_id);
            }
        }
    }

    fn link(&mut self, task_id: TaskId, column_id: ColumnId, position: usize) {
        let ids = self.column_order.entry(column_id).or_default();
        let slot = position.min(ids.len());
        ids.insert(slot, task_id);
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] if the lock is poisoned.
    pub fn find(&self, task_id: TaskId) -> TaskPersistenceResult<Option<StoredTask>> {
        Ok(self.read()?.tasks.get(&task_id).cloned())
    }

    /// Returns the stored order of a column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] if the lock is poisoned.
    pub fn column_order(&self, column_id: ColumnId) -> TaskPersistenceResult<Vec<TaskId>> {
        Ok(self
            .read()?
            .column_order
            .get(&column_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns the stored position of a task within its column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] if the lock is poisoned.
    pub fn position(&self, task_id: TaskId) -> TaskPersistenceResult<Option<usize>> {
        let state = self.read()?;
        Ok(state.tasks.get(&task_id).and_then(|task| {
            state
                .column_order
                .get(&task.column_id)
                .and_then(|ids| ids.iter().position(|id| *id == task_id))
        }))
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] if the lock is poisoned.
    pub fn stored_count(&self) -> TaskPersistenceResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    fn read(&self) -> TaskPersistenceResult<RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state.read().map_err(|err| {
            TaskPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskPersistenceResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state.write().map_err(|err| {
            TaskPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskPersistence for InMemoryTaskStore {
    async fn create_task(&self, record: &CreateTaskRecord) -> TaskPersistenceResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&record.task_id) {
            return Err(TaskPersistenceError::DuplicateTask(record.task_id));
        }

        state.link(record.task_id, record.column_id, record.position);
        state.tasks.insert(
            record.task_id,
            StoredTask {
                task_id: record.task_id,
                column_id: record.column_id,
                title: record.title.clone(),
                description: record.description.clone(),
                assignee_id: record.assignee_id,
                priority: record.priority,
                due_date: record.due_date,
                labels: record.labels.clone(),
            },
        );
        Ok(())
    }

    async fn update_task(&self, record: &UpdateTaskRecord) -> TaskPersistenceResult<()> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&record.task_id)
            .ok_or(TaskPersistenceError::NotFound(record.task_id))?;

        let patch = &record.patch;
        if let Some(title) = &patch.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            task.description.clone_from(description);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            task.assignee_id = assignee;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(labels) = &patch.labels {
            task.labels.clone_from(labels);
        }
        Ok(())
    }

    async fn move_task(&self, record: &MoveTaskRecord) -> TaskPersistenceResult<()> {
        let mut state = self.write()?;
        let previous_column = state
            .tasks
            .get(&record.task_id)
            .map(|task| task.column_id)
            .ok_or(TaskPersistenceError::NotFound(record.task_id))?;

        state.unlink(record.task_id, previous_column);
        state.link(record.task_id, record.column_id, record.position);
        if let Some(task) = state.tasks.get_mut(&record.task_id) {
            task.column_id = record.column_id;
        }
        Ok(())
    }

    async fn delete_task(&self, record: &DeleteTaskRecord) -> TaskPersistenceResult<()> {
        let mut state = self.write()?;
        let removed = state
            .tasks
            .remove(&record.task_id)
            .ok_or(TaskPersistenceError::NotFound(record.task_id))?;
        state.unlink(record.task_id, removed.column_id);
        Ok(())
    }
}
