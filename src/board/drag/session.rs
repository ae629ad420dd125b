//! Pointer-driven drag state machine.
//!
//! A session is Idle until the pointer, pressed on a task, travels past the
//! activation distance. While Dragging every hover change is resolved into a
//! provisional placement that only affects [`DragSession::preview`]. The
//! board is mutated at most once, on release over a valid target. Dropped and
//! Cancelled are reported as a [`DragOutcome`] and the session is Idle again
//! immediately afterwards.

use super::{HoverTarget, Reconciler, Resolution};
use crate::board::config::BoardConfig;
use crate::board::domain::{Board, ColumnId, Point, TaskId, TaskMove};
use mockable::{Clock, DefaultClock};
use tracing::{debug, trace};

/// Observable phase of a drag session.
///
/// The terminal Dropped and Cancelled states are not phases: they are
/// returned from [`DragSession::release`] and [`DragSession::cancel`] as a
/// [`DragOutcome`], and the session is Idle again by the time the caller sees
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress. A pressed-but-not-yet-moved pointer is still
    /// Idle.
    Idle,
    /// A task is being dragged.
    Dragging,
}

/// How a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pointer was released or cancelled before the drag activated.
    NotStarted,
    /// Released over a valid target. Carries the committed move, or `None`
    /// when the task was dropped onto its own slot.
    Dropped(Option<TaskMove>),
    /// Released over nothing, or cancelled explicitly. The board is
    /// unchanged.
    Cancelled,
}

/// Snapshot of an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    /// The task being dragged.
    pub task_id: TaskId,
    /// Column the task was in when the drag started.
    pub origin_column: ColumnId,
    /// Index the task was at when the drag started.
    pub origin_index: usize,
    /// Last reported pointer position.
    pub pointer: Point,
    /// Current hover target.
    pub hover: HoverTarget,
    /// Placement resolved when the hover target was last reported.
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Armed { task_id: TaskId, origin: Point },
    Dragging(ActiveDrag),
}

/// Tracks one pointer gesture at a time.
///
/// Only the dragged task's identifier is held; task data stays on the
/// [`Board`].
#[derive(Debug, Clone)]
pub struct DragSession {
    activation_distance: u32,
    state: DragState,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl DragSession {
    /// Creates an idle session with the given activation distance in pixels.
    #[must_use]
    pub const fn new(activation_distance: u32) -> Self {
        Self {
            activation_distance,
            state: DragState::Idle,
        }
    }

    /// Creates an idle session from board configuration.
    #[must_use]
    pub const fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.activation_distance)
    }

    /// Returns the observable phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle | DragState::Armed { .. } => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    /// Returns the active drag, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(active) => Some(active),
            DragState::Idle | DragState::Armed { .. } => None,
        }
    }

    /// Returns the identifier of the dragged task.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<TaskId> {
        match self.active() {
            Some(active) => Some(active.task_id),
            None => None,
        }
    }

    /// Records a pointer press on a task.
    ///
    /// Ignored unless the session is Idle and the task exists. Returns
    /// `true` when the press was recorded.
    pub fn press(&mut self, task_id: TaskId, pointer: Point, board: &Board) -> bool {
        if !matches!(self.state, DragState::Idle) || board.task(task_id).is_none() {
            return false;
        }
        trace!(%task_id, "pointer pressed on task");
        self.state = DragState::Armed {
            task_id,
            origin: pointer,
        };
        true
    }

    /// Reports pointer movement.
    ///
    /// Starts the drag once the pointer is strictly further than the
    /// activation distance from where it was pressed, capturing the task's
    /// origin column and index. Returns `true` on the move that activates the
    /// drag.
    pub fn pointer_move(&mut self, pointer: Point, board: &Board) -> bool {
        match &mut self.state {
            DragState::Idle => false,
            DragState::Dragging(active) => {
                active.pointer = pointer;
                false
            }
            DragState::Armed { task_id, origin } => {
                let threshold = u64::from(self.activation_distance);
                if origin.distance_squared(pointer) <= threshold.saturating_mul(threshold) {
                    return false;
                }
                let pressed = *task_id;
                let Some((origin_column, origin_index)) = board.locate(pressed) else {
                    self.state = DragState::Idle;
                    return false;
                };
                trace!(task_id = %pressed, %origin_column, origin_index, "drag activated");
                self.state = DragState::Dragging(ActiveDrag {
                    task_id: pressed,
                    origin_column,
                    origin_index,
                    pointer,
                    hover: HoverTarget::Nothing,
                    resolution: Resolution::Invalid,
                });
                true
            }
        }
    }

    /// Records the current hover target and computes the provisional
    /// placement.
    ///
    /// Returns `None` when no drag is active.
    pub fn hover(&mut self, target: HoverTarget, board: &Board) -> Option<Resolution> {
        let DragState::Dragging(active) = &mut self.state else {
            return None;
        };
        let resolution = Reconciler::resolve(board, active.task_id, target);
        trace!(task_id = %active.task_id, ?target, ?resolution, "hover resolved");
        active.hover = target;
        active.resolution = resolution;
        Some(resolution)
    }

    /// Ends the gesture on pointer release.
    ///
    /// Over a valid target the placement is recomputed against `board` and
    /// committed with a single [`Board::move_task`]. Over nothing the drag is
    /// cancelled. Either way the session returns to Idle.
    pub fn release(&mut self, board: &mut Board, clock: &impl Clock) -> DragOutcome {
        let previous = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging(active) = previous else {
            return DragOutcome::NotStarted;
        };

        let outcome = match Reconciler::resolve(board, active.task_id, active.hover) {
            Resolution::Invalid => DragOutcome::Cancelled,
            Resolution::Unchanged => DragOutcome::Dropped(None),
            Resolution::Move(placement) => DragOutcome::Dropped(board.move_task(
                active.task_id,
                placement.column_id,
                placement.index,
                clock,
            )),
        };
        debug!(task_id = %active.task_id, ?outcome, "drag released");
        outcome
    }

    /// Abandons the gesture, for example on lost pointer capture or Escape.
    ///
    /// The board is never touched.
    pub fn cancel(&mut self) -> DragOutcome {
        let previous = std::mem::replace(&mut self.state, DragState::Idle);
        match previous {
            DragState::Dragging(active) => {
                debug!(task_id = %active.task_id, "drag cancelled");
                DragOutcome::Cancelled
            }
            DragState::Idle | DragState::Armed { .. } => DragOutcome::NotStarted,
        }
    }

    /// Returns `board` as it should be rendered: with the provisional
    /// placement applied when a drag is active, unchanged otherwise.
    ///
    /// The hover target is resolved against `board` itself, so the preview
    /// always shows what [`DragSession::release`] would commit even after the
    /// board changed mid-drag.
    #[must_use]
    pub fn preview(&self, board: &Board) -> Board {
        let mut view = board.clone();
        let provisional = self.active().and_then(|active| {
            let placement = Reconciler::resolve(board, active.task_id, active.hover).placement()?;
            Some((active.task_id, placement))
        });
        if let Some((task_id, target)) = provisional {
            view.move_task(task_id, target.column_id, target.index, &DefaultClock);
        }
        view
    }
}
