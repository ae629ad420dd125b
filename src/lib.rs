//! Taskboard: drag-driven task board engine.
//!
//! This crate provides the state behind a kanban-style task board: ordered
//! columns of ordered task cards, a pointer-driven drag session that reorders
//! cards within and across columns, and a search projection over the board.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and rendering
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board Model, drag session, reconciler and visibility filter

pub mod board;
