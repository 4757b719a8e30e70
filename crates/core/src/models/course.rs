use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::section::Section;

/// A named set of alternative sections. A schedule picks exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with a trimmed, non-empty name.
    pub fn new(name: impl AsRef<str>, sections: Vec<Section>) -> ScheduleResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ScheduleError::Validation(
                "Course name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            sections,
        })
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}
