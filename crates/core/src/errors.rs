use thiserror::Error;

use crate::models::section::Section;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Section {section} conflicts with {course} ({existing})")]
    Conflict {
        section: Section,
        course: String,
        existing: Section,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScheduleError {
    /// Whether the error is an expected rejection of user input rather than a
    /// failure of the process.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ScheduleError::NotFound(_) | ScheduleError::Validation(_) | ScheduleError::Conflict { .. }
        )
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
