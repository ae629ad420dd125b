//! In-memory adapters.

mod observer;
mod task_store;

pub use observer::RecordingObserver;
pub use task_store::{InMemoryTaskStore, StoredTask};
