//! What the pointer is over while a task is being dragged.

use crate::board::domain::{ColumnId, DropEdge, Point, Rect, TaskId};
use serde::{Deserialize, Serialize};

/// The element currently under the pointer during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HoverTarget {
    /// No valid drop target; releasing here cancels the drag.
    #[default]
    Nothing,
    /// The empty area of a column, below or between its cards.
    Column {
        /// The hovered column.
        column_id: ColumnId,
    },
    /// A specific task card.
    Task {
        /// The hovered task.
        task_id: TaskId,
        /// Which half of the card the pointer is in.
        edge: DropEdge,
    },
}

impl HoverTarget {
    /// Targets a column's empty area.
    #[must_use]
    pub const fn column(column_id: ColumnId) -> Self {
        Self::Column { column_id }
    }

    /// Targets a task card, deriving the edge from the pointer position
    /// within the card's bounds.
    #[must_use]
    pub fn task_at(task_id: TaskId, bounds: Rect, pointer: Point) -> Self {
        Self::Task {
            task_id,
            edge: DropEdge::from_pointer(bounds, pointer),
        }
    }

    /// Returns `true` for [`HoverTarget::Nothing`].
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}
