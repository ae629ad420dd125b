//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod observer;
pub mod persistence;

pub use observer::BoardObserver;
pub use persistence::{
    CreateTaskRecord, DeleteTaskRecord, MoveTaskRecord, TaskPersistence, TaskPersistenceError,
    TaskPersistenceResult, UpdateTaskRecord,
};

#[cfg(test)]
pub use persistence::MockTaskPersistence;
