//! Application service wiring user input through the drag session, the
//! reconciler and the Board Model out to observers and persistence.

use crate::board::{
    config::{BoardConfig, FilteredDragPolicy},
    domain::{
        Board, BoardChange, ColumnColor, ColumnId, Point, Task, TaskDraft, TaskId, TaskMove,
        TaskPatch, filter,
    },
    drag::{DragOutcome, DragPhase, DragSession, HoverTarget, Resolution},
    ports::{
        BoardObserver, CreateTaskRecord, DeleteTaskRecord, MoveTaskRecord, TaskPersistence,
        TaskPersistenceError, UpdateTaskRecord,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for board operations.
///
/// A persistence failure never rolls back the local board; the mutation
/// stays applied and the error is reported to the caller.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The persistence adapter rejected a committed change.
    #[error(transparent)]
    Persistence(#[from] TaskPersistenceError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Handle returned by [`BoardService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Board session orchestration service.
pub struct BoardService<P, C>
where
    P: TaskPersistence,
    C: Clock + Send + Sync,
{
    board: Board,
    session: DragSession,
    query: String,
    config: BoardConfig,
    persistence: Arc<P>,
    clock: Arc<C>,
    observers: Vec<(SubscriptionId, Arc<dyn BoardObserver>)>,
    next_subscription: u64,
}

impl<P, C> BoardService<P, C>
where
    P: TaskPersistence,
    C: Clock + Send + Sync,
{
    /// Creates a service over an empty board.
    #[must_use]
    pub fn new(persistence: Arc<P>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self::with_board(Board::new(), persistence, clock, config)
    }

    /// Creates a service over an existing board.
    #[must_use]
    pub fn with_board(
        board: Board,
        persistence: Arc<P>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        Self {
            board,
            session: DragSession::from_config(&config),
            query: String::new(),
            config,
            persistence,
            clock,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the canonical board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the drag session phase.
    #[must_use]
    pub const fn drag_phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// Returns the board as it should be rendered: the drag preview, if any,
    /// narrowed by the current search query.
    #[must_use]
    pub fn visible_board(&self) -> Board {
        filter(&self.session.preview(&self.board), &self.query)
    }

    /// Registers an observer and returns a handle for removing it.
    pub fn subscribe(&mut self, observer: Arc<dyn BoardObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` if the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.notify_view();
    }

    /// Appends a new empty column.
    pub fn add_column(&mut self, title: impl Into<String>, color: ColumnColor) -> ColumnId {
        let column_id = self.board.add_column(title, color);
        self.notify(&BoardChange::ColumnAdded { column_id });
        column_id
    }

    /// Renames a column. Returns `false` if the column is unknown.
    pub fn rename_column(&mut self, column_id: ColumnId, title: impl Into<String>) -> bool {
        let title_text = title.into();
        if !self.board.rename_column(column_id, title_text.clone()) {
            return false;
        }
        self.notify(&BoardChange::ColumnRenamed {
            column_id,
            title: title_text,
        });
        true
    }

    /// Deletes a column, discarding its tasks and deleting each one from
    /// storage.
    ///
    /// Returns the discarded task identifiers, or `None` if the column is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardServiceError::Persistence`] raised while
    /// deleting the discarded tasks. Every delete is attempted.
    pub async fn delete_column(
        &mut self,
        column_id: ColumnId,
    ) -> BoardServiceResult<Option<Vec<TaskId>>> {
        let Some(tasks) = self.board.delete_column(column_id) else {
            return Ok(None);
        };
        let discarded: Vec<TaskId> = tasks.iter().map(|task| task.id()).collect();
        let change = BoardChange::ColumnDeleted {
            column_id,
            discarded: discarded.clone(),
        };
        self.notify(&change);
        self.persist(&change).await?;
        Ok(Some(discarded))
    }

    /// Appends a task to the end of a column.
    ///
    /// Returns `None` if the column is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the task fails;
    /// the task stays on the board.
    pub async fn add_task(
        &mut self,
        column_id: ColumnId,
        draft: TaskDraft,
    ) -> BoardServiceResult<Option<TaskId>> {
        self.add_task_at(column_id, draft, usize::MAX).await
    }

    /// Inserts a task at a clamped index in a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the task fails;
    /// the task stays on the board.
    pub async fn add_task_at(
        &mut self,
        column_id: ColumnId,
        draft: TaskDraft,
        index: usize,
    ) -> BoardServiceResult<Option<TaskId>> {
        let Some((task_id, position)) =
            self.board.add_task_at(column_id, draft, index, &*self.clock)
        else {
            return Ok(None);
        };
        let change = BoardChange::TaskAdded {
            task_id,
            column_id,
            position,
        };
        self.notify(&change);
        self.persist(&change).await?;
        Ok(Some(task_id))
    }

    /// Merges a patch into a task.
    ///
    /// Returns `false` if the task is unknown or the patch is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the update
    /// fails; the update stays applied.
    pub async fn update_task(
        &mut self,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> BoardServiceResult<bool> {
        if !self.board.update_task(task_id, &patch, &*self.clock) {
            return Ok(false);
        }
        let change = BoardChange::TaskUpdated { task_id, patch };
        self.notify(&change);
        self.persist(&change).await?;
        Ok(true)
    }

    /// Moves a task directly, bypassing the drag session.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the move fails;
    /// the move stays applied.
    pub async fn move_task(
        &mut self,
        task_id: TaskId,
        target_column: ColumnId,
        target_index: usize,
    ) -> BoardServiceResult<Option<TaskMove>> {
        let Some(task_move) =
            self.board.move_task(task_id, target_column, target_index, &*self.clock)
        else {
            return Ok(None);
        };
        self.commit_move(task_move).await?;
        Ok(Some(task_move))
    }

    /// Deletes a task.
    ///
    /// Returns `false` if the task is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the deletion
    /// fails; the task stays deleted locally.
    pub async fn delete_task(&mut self, task_id: TaskId) -> BoardServiceResult<bool> {
        let Some(removed) = self.board.delete_task(task_id) else {
            return Ok(false);
        };
        let change = BoardChange::TaskDeleted {
            task_id,
            column_id: removed.task.column_id(),
            position: removed.position,
        };
        self.notify(&change);
        self.persist(&change).await?;
        Ok(true)
    }

    /// Records a comment on a task card. Returns `false` if the task is
    /// unknown.
    pub fn record_comment(&mut self, task_id: TaskId) -> bool {
        let Some(task) = self.board.task_mut(task_id) else {
            return false;
        };
        task.record_comment(&*self.clock);
        let change = Self::counters_changed(task);
        self.notify(&change);
        true
    }

    /// Records an attachment on a task card. Returns `false` if the task is
    /// unknown.
    pub fn record_attachment(&mut self, task_id: TaskId) -> bool {
        let Some(task) = self.board.task_mut(task_id) else {
            return false;
        };
        task.record_attachment(&*self.clock);
        let change = Self::counters_changed(task);
        self.notify(&change);
        true
    }

    const fn counters_changed(task: &Task) -> BoardChange {
        BoardChange::TaskCountersChanged {
            task_id: task.id(),
            comment_count: task.comment_count(),
            attachment_count: task.attachment_count(),
        }
    }

    /// Starts tracking a pointer press on a task.
    ///
    /// Returns `false` when a gesture is already in progress, the task is
    /// unknown, or dragging is disabled while a query is active.
    pub fn press(&mut self, task_id: TaskId, pointer: Point) -> bool {
        if self.config.filtered_drag == FilteredDragPolicy::Disabled && !self.query.is_empty() {
            debug!(%task_id, "drag ignored while search query is active");
            return false;
        }
        self.session.press(task_id, pointer, &self.board)
    }

    /// Reports pointer movement. Returns `true` when the drag activates.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let activated = self.session.pointer_move(pointer, &self.board);
        if activated {
            self.notify_view();
        }
        activated
    }

    /// Updates the hover target and returns the provisional placement.
    pub fn hover(&mut self, target: HoverTarget) -> Option<Resolution> {
        let resolution = self.session.hover(target, &self.board)?;
        self.notify_view();
        Some(resolution)
    }

    /// Ends the gesture on pointer release, committing the placement.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] if storing the committed
    /// move fails; the move stays applied.
    pub async fn release(&mut self) -> BoardServiceResult<DragOutcome> {
        let outcome = self.session.release(&mut self.board, &*self.clock);
        match outcome {
            DragOutcome::Dropped(Some(task_move)) => self.commit_move(task_move).await?,
            DragOutcome::Dropped(None) | DragOutcome::Cancelled => self.notify_view(),
            DragOutcome::NotStarted => {}
        }
        Ok(outcome)
    }

    /// Abandons the gesture and discards any preview.
    pub fn cancel(&mut self) -> DragOutcome {
        let outcome = self.session.cancel();
        if outcome == DragOutcome::Cancelled {
            self.notify_view();
        }
        outcome
    }

    async fn commit_move(&self, task_move: TaskMove) -> BoardServiceResult<()> {
        debug!(
            task_id = %task_move.task_id,
            to_column = %task_move.to_column,
            to_position = task_move.to_position,
            "task moved"
        );
        let change = BoardChange::TaskMoved(task_move);
        self.notify(&change);
        self.persist(&change).await
    }

    fn notify(&self, change: &BoardChange) {
        for (_, observer) in &self.observers {
            observer.board_changed(change);
        }
    }

    fn notify_view(&self) {
        for (_, observer) in &self.observers {
            observer.view_changed();
        }
    }

    async fn persist(&self, change: &BoardChange) -> BoardServiceResult<()> {
        let result = match change {
            BoardChange::ColumnAdded { .. }
            | BoardChange::ColumnRenamed { .. }
            | BoardChange::TaskCountersChanged { .. } => Ok(()),
            BoardChange::ColumnDeleted { discarded, .. } => {
                let mut first_error = None;
                for task_id in discarded {
                    let record = DeleteTaskRecord { task_id: *task_id };
                    if let Err(err) = self.persistence.delete_task(&record).await {
                        first_error.get_or_insert(err);
                    }
                }
                first_error.map_or(Ok(()), Err)
            }
            BoardChange::TaskAdded {
                task_id, position, ..
            } => match self.board.task(*task_id) {
                Some(task) => {
                    let record = CreateTaskRecord::from_task(task, *position);
                    self.persistence.create_task(&record).await
                }
                None => Ok(()),
            },
            BoardChange::TaskMoved(task_move) => {
                let record = MoveTaskRecord {
                    task_id: task_move.task_id,
                    column_id: task_move.to_column,
                    position: task_move.to_position,
                };
                self.persistence.move_task(&record).await
            }
            BoardChange::TaskUpdated { task_id, patch } => {
                let record = UpdateTaskRecord {
                    task_id: *task_id,
                    patch: patch.clone(),
                };
                self.persistence.update_task(&record).await
            }
            BoardChange::TaskDeleted { task_id, .. } => {
                let record = DeleteTaskRecord { task_id: *task_id };
                self.persistence.delete_task(&record).await
            }
        };

        if let Err(err) = &result {
            warn!(error = %err, "persistence adapter rejected board change");
        }
        result.map_err(BoardServiceError::from)
    }
}
