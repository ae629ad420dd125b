//! Domain model for the task board.
//!
//! The board domain holds the ordered columns of ordered tasks, the pure
//! operations that mutate them, and the non-mutating search projection. It
//! knows nothing about pointers, rendering or storage.

mod board;
mod change;
mod column;
mod error;
mod filter;
mod geometry;
mod ids;
mod task;

pub use board::Board;
pub use change::{BoardChange, RemovedTask, TaskMove};
pub use column::{Column, ColumnColor};
pub use error::{BoardDocumentError, ParsePriorityError};
pub use filter::filter;
pub use geometry::{DropEdge, Point, Rect};
pub use ids::{AssigneeId, ColumnId, TaskId};
pub use task::{Priority, Task, TaskDraft, TaskPatch};
