//! # Scheduling Engine
//!
//! Pure functions over one student's courses. Nothing here mutates a record
//! or performs I/O.
//!
//! - [`conflict`]: pairwise overlap test and the add-section gate
//! - [`generator`]: every conflict-free combination of one section per course

pub mod conflict;
pub mod generator;

pub use conflict::{conflicts, find_conflict, has_conflict_with_existing};
pub use generator::generate_schedules;
