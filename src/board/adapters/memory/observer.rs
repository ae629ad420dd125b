//! Observer that records every notification it receives.

use std::sync::{Arc, Mutex};

use crate::board::{domain::BoardChange, ports::BoardObserver};

/// Thread-safe observer collecting board notifications in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    changes: Arc<Mutex<Vec<BoardChange>>>,
    view_changes: Arc<Mutex<usize>>,
}

impl RecordingObserver {
    /// Creates an observer with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed changes seen so far.
    #[must_use]
    pub fn changes(&self) -> Vec<BoardChange> {
        self.changes
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }

    /// Returns how many view-only notifications were seen.
    #[must_use]
    pub fn view_change_count(&self) -> usize {
        self.view_changes.lock().map(|count| *count).unwrap_or_default()
    }
}

impl BoardObserver for RecordingObserver {
    fn board_changed(&self, change: &BoardChange) {
        if let Ok(mut changes) = self.changes.lock() {
            changes.push(change.clone());
        }
    }

    fn view_changed(&self) {
        if let Ok(mut count) = self.view_changes.lock() {
            *count = count.saturating_add(1);
        }
    }
}
