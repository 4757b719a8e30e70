//! # Course Scheduler Core
//!
//! Data model and scheduling engine for the course scheduler. Everything in
//! this crate is pure: records go in, derived values come out, and callers
//! decide what to persist.
//!
//! - **models**: days, sections, courses, student records, drafts and
//!   schedule combinations
//! - **engine**: section conflict checks and schedule-set generation
//! - **commands**: edit commands applied to a record and its draft
//! - **errors**: the error taxonomy shared by every crate in the workspace

pub mod commands;
pub mod engine;
pub mod errors;
pub mod models;
