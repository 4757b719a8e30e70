use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::course::Course;

/// All courses saved for one student.
///
/// Courses keep the order they were first saved in; that order drives the
/// order of generated schedules. Course names are unique within a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    pub student_id: String,
    courses: Vec<Course>,
}

impl StudentRecord {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            courses: Vec::new(),
        }
    }

    /// Builds a record from an ordered list of courses.
    ///
    /// # Errors
    ///
    /// `ScheduleError::Validation` if two courses share a name.
    pub fn with_courses(student_id: impl Into<String>, courses: Vec<Course>) -> ScheduleResult<Self> {
        let mut record = Self::new(student_id);
        for course in courses {
            if record.course(&course.name).is_some() {
                return Err(ScheduleError::Validation(format!(
                    "Duplicate course '{}'",
                    course.name
                )));
            }
            record.courses.push(course);
        }
        Ok(record)
    }

    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.name == name)
    }

    /// Inserts a course, replacing a same-named one in place.
    ///
    /// Returns the replaced course, if any.
    pub fn upsert_course(&mut self, course: Course) -> Option<Course> {
        match self.courses.iter_mut().find(|existing| existing.name == course.name) {
            Some(existing) => Some(std::mem::replace(existing, course)),
            None => {
                self.courses.push(course);
                None
            }
        }
    }

    /// Puts `course` where the course named `name` is, keeping its position.
    pub fn replace_course(&mut self, name: &str, course: Course) -> ScheduleResult<Course> {
        let existing = self
            .courses
            .iter_mut()
            .find(|existing| existing.name == name)
            .ok_or_else(|| ScheduleError::NotFound(format!("Course '{}'", name)))?;

        Ok(std::mem::replace(existing, course))
    }

    pub fn delete_course(&mut self, name: &str) -> ScheduleResult<Course> {
        let index = self
            .courses
            .iter()
            .position(|course| course.name == name)
            .ok_or_else(|| ScheduleError::NotFound(format!("Course '{}'", name)))?;

        Ok(self.courses.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
