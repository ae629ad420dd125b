//! Visibility Filter: a read-only projection of the board narrowed by a
//! search term.

use super::Board;

/// Returns a copy of `board` keeping only tasks whose title, description or
/// any label contains `query`, compared case-insensitively.
///
/// Column identity and order are preserved, as is the relative order of the
/// surviving tasks. An empty query returns an equal copy. `board` is never
/// modified.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::domain::{filter, Board, ColumnColor, TaskDraft};
///
/// let mut board = Board::new();
/// let todo = board.add_column("To Do", ColumnColor::default());
/// board.add_task(todo, TaskDraft::new("Design"), &DefaultClock);
/// board.add_task(todo, TaskDraft::new("Build"), &DefaultClock);
///
/// let view = filter(&board, "des");
/// assert_eq!(view.task_count(), 1);
/// assert_eq!(board.task_count(), 2);
/// ```
#[must_use]
pub fn filter(board: &Board, query: &str) -> Board {
    let mut view = board.clone();
    if query.is_empty() {
        return view;
    }
    let needle = query.to_lowercase();
    view.retain_tasks(|task| task.mentions(&needle));
    view
}
