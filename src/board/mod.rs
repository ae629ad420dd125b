//! Task board state and drag-and-drop reordering.
//!
//! A board is an ordered sequence of columns, each owning an ordered sequence
//! of tasks. Tasks move between and within columns through a pointer drag
//! gesture: the drag session tracks the gesture, the reconciler turns hover
//! targets into placements, and the Board Model applies the single committed
//! move on drop. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Drag gesture handling in [`drag`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Interaction settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod drag;
pub mod ports;
pub mod services;
