//! Step definitions for board reordering scenarios.

pub mod then;
pub mod when;
pub mod world;
