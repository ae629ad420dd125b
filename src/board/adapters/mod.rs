//! Adapters implementing the board ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory task storage with
//!   explicit per-column positions
//! - [`memory::RecordingObserver`]: collects board notifications for
//!   rendering-layer tests

pub mod memory;
