//! Drag-and-drop reordering.
//!
//! [`DragSession`] follows the pointer gesture; [`Reconciler`] turns hover
//! targets into placements and applies them to the board.

mod hover;
mod reconciler;
mod session;

pub use hover::HoverTarget;
pub use reconciler::{Placement, Reconciler, Resolution};
pub use session::{ActiveDrag, DragOutcome, DragPhase, DragSession};
