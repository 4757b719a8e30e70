use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::course::Course;
use crate::models::section::Section;

/// The course currently open for editing.
///
/// `original_name` is set when the draft was opened from a saved course, so
/// committing a renamed draft replaces the old entry instead of duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub sections: Vec<Section>,
    pub original_name: Option<String>,
}

impl CourseDraft {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            sections: course.sections.clone(),
            original_name: Some(course.name.clone()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.sections.is_empty()
    }

    /// Whether a saved course is the one this draft will replace on commit.
    pub fn replaces(&self, course_name: &str) -> bool {
        self.name == course_name || self.original_name.as_deref() == Some(course_name)
    }

    /// Turns the draft into a course ready to be saved.
    pub fn to_course(&self) -> ScheduleResult<Course> {
        let course = Course::new(&self.name, self.sections.clone())?;
        if !course.has_sections() {
            return Err(ScheduleError::Validation(format!(
                "No sections for course '{}'",
                course.name
            )));
        }
        Ok(course)
    }
}
