//! Subscription contract for the rendering layer.

use crate::board::domain::BoardChange;

/// Receives notifications whenever the board or its rendered view changes.
pub trait BoardObserver: Send + Sync {
    /// Called once per committed Board Model mutation.
    fn board_changed(&self, change: &BoardChange);

    /// Called when the rendered view changes without a committed mutation:
    /// a new search query, a new drag preview, or a discarded preview.
    fn view_changed(&self) {}
}
