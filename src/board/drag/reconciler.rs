//! Turns a hover target into a concrete column and index for the dragged
//! task.
//!
//! Indices produced here address the target column with the dragged task
//! already removed, which is the convention [`Board::move_task`] expects.

use super::HoverTarget;
use crate::board::domain::{Board, ColumnId, DropEdge, TaskId, TaskMove};
use mockable::Clock;
use serde::Serialize;

/// Where the dragged task should end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Target column.
    pub column_id: ColumnId,
    /// Target index in the column after removal of the dragged task.
    pub index: usize,
}

/// Result of resolving a hover target against the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    /// The target does not resolve to anything on the board.
    #[default]
    Invalid,
    /// The task would land exactly where it already is.
    Unchanged,
    /// The task needs to move.
    Move(Placement),
}

impl Resolution {
    /// Returns the placement for a move, if any.
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        match self {
            Self::Move(placement) => Some(*placement),
            Self::Invalid | Self::Unchanged => None,
        }
    }

    /// Returns `true` if the target was valid, whether or not a move is
    /// needed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Stateless placement algorithm shared by hover previews and drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler;

impl Reconciler {
    /// Computes where `task_id` lands if dropped on `target`.
    ///
    /// Hovering a column's empty area appends to that column. Hovering a
    /// task inserts before it when the pointer is in the card's upper half
    /// and after it otherwise. A placement equal to the task's current slot
    /// is [`Resolution::Unchanged`].
    #[must_use]
    pub fn resolve(board: &Board, task_id: TaskId, target: HoverTarget) -> Resolution {
        let Some((source_column, source_index)) = board.locate(task_id) else {
            return Resolution::Invalid;
        };

        let candidate = match target {
            HoverTarget::Nothing => None,
            HoverTarget::Column { column_id } => board.column(column_id).map(|column| {
                let end = if column_id == source_column {
                    column.len().saturating_sub(1)
                } else {
                    column.len()
                };
                Placement {
                    column_id,
                    index: end,
                }
            }),
            HoverTarget::Task {
                task_id: hovered,
                edge,
            } => {
                if hovered == task_id {
                    return Resolution::Unchanged;
                }
                board.locate(hovered).map(|(column_id, hovered_index)| {
                    let anchor = if column_id == source_column && source_index < hovered_index {
                        hovered_index.saturating_sub(1)
                    } else {
                        hovered_index
                    };
                    let index = match edge {
                        DropEdge::Before => anchor,
                        DropEdge::After => anchor.saturating_add(1),
                    };
                    Placement { column_id, index }
                })
            }
        };

        match candidate {
            None => Resolution::Invalid,
            Some(placement)
                if placement.column_id == source_column && placement.index == source_index =>
            {
                Resolution::Unchanged
            }
            Some(placement) => Resolution::Move(placement),
        }
    }

    /// Resolves `target` and applies the resulting move to `board`.
    ///
    /// Returns `None` when the target is invalid or the move is degenerate;
    /// the board is untouched in both cases.
    pub fn reconcile(
        board: &mut Board,
        task_id: TaskId,
        target: HoverTarget,
        clock: &impl Clock,
    ) -> Option<TaskMove> {
        let placement = Self::resolve(board, task_id, target).placement()?;
        board.move_task(task_id, placement.column_id, placement.index, clock)
    }
}
