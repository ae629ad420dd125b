//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    config::BoardConfig,
    domain::{Board, ColumnColor, ColumnId, TaskDraft, TaskId},
    services::BoardService,
};

/// Service type used by the integration tests.
pub type TestService = BoardService<InMemoryTaskStore, DefaultClock>;

/// A service over a three-column board plus handles for its parts.
pub struct Harness {
    pub service: TestService,
    pub store: Arc<InMemoryTaskStore>,
    pub todo: ColumnId,
    pub doing: ColumnId,
    pub done: ColumnId,
}

impl Harness {
    /// Adds tasks to a column through the service, returning their IDs.
    pub async fn seed(&mut self, column_id: ColumnId, titles: &[&str]) -> Vec<TaskId> {
        let mut ids = Vec::with_capacity(titles.len());
        for title in titles {
            let id = self
                .service
                .add_task(column_id, TaskDraft::new(*title))
                .await
                .expect("task creation should succeed")
                .expect("column should exist");
            ids.push(id);
        }
        ids
    }

    /// Asserts the store's per-column order matches the board for every
    /// column.
    pub fn assert_store_matches_board(&self) {
        for column in self.service.board().columns() {
            let expected: Vec<TaskId> = column.task_ids().collect();
            let stored = self
                .store
                .column_order(column.id())
                .expect("store should be readable");
            assert_eq!(stored, expected, "column {}", column.title());
        }
    }
}

/// Fixture building a harness with "To Do", "In Progress" and "Done".
#[fixture]
pub fn harness() -> Harness {
    harness_with(BoardConfig::default())
}

/// Builds a harness with a specific configuration.
pub fn harness_with(config: BoardConfig) -> Harness {
    let store = Arc::new(InMemoryTaskStore::new());
    let mut service =
        BoardService::with_board(Board::new(), Arc::clone(&store), Arc::new(DefaultClock), config);
    let todo = service.add_column("To Do", ColumnColor::new("gray"));
    let doing = service.add_column("In Progress", ColumnColor::new("blue"));
    let done = service.add_column("Done", ColumnColor::new("green"));
    Harness {
        service,
        store,
        todo,
        doing,
        done,
    }
}

/// Titles of the tasks in a column, in order.
pub fn titles(board: &Board, column_id: ColumnId) -> Vec<String> {
    board
        .column(column_id)
        .map(|column| {
            column
                .tasks()
                .iter()
                .map(|task| task.title().to_owned())
                .collect()
        })
        .unwrap_or_default()
}
