//! Shared world state for board reordering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    config::BoardConfig,
    domain::{Board, ColumnId, TaskId},
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for board reordering behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub store: Arc<InMemoryTaskStore>,
    pub columns: HashMap<String, ColumnId>,
    pub tasks: HashMap<String, TaskId>,
    pub snapshot: Option<Board>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let service = BoardService::new(
            Arc::clone(&store),
            Arc::new(DefaultClock),
            BoardConfig::default(),
        );

        Self {
            service,
            store,
            columns: HashMap::new(),
            tasks: HashMap::new(),
            snapshot: None,
        }
    }

    /// Looks up a column by title.
    pub fn column(&self, title: &str) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown column '{title}' in scenario"))
    }

    /// Looks up a task by title.
    pub fn task(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task '{title}' in scenario"))
    }

    /// Records the board before an action so it can be compared later.
    pub fn take_snapshot(&mut self) {
        self.snapshot = Some(self.service.board().clone());
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated scenario list into trimmed entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Titles of the tasks in a column of `board`, in order.
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

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
