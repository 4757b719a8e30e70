//! # Edit Commands
//!
//! Every change a user makes to their saved courses is expressed as an
//! [`EditCommand`] value and run through [`apply`]. `apply` never touches
//! its inputs: it returns the next record and draft, or an error describing
//! why the command was rejected. Callers swap the new values in only on
//! success, so a rejected command leaves their state exactly as it was.

use tracing::debug;

use crate::engine::conflict::find_conflict;
use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::{course::Course, draft::CourseDraft, section::Section, student::StudentRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Discard the current draft and start an empty one.
    StartCourse { name: String },
    /// Add a section to the draft, rejecting it if it overlaps another course.
    AddSection(Section),
    /// Change the draft's name. Committing a renamed saved course replaces it.
    RenameDraft { name: String },
    /// Remove the draft section at a zero-based index.
    RemoveSection(usize),
    /// Save or update the draft course in the record.
    SaveCourse,
    /// Open a saved course in the draft.
    EditCourse { name: String },
    DeleteCourse { name: String },
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub record: StudentRecord,
    pub draft: CourseDraft,
}

pub fn apply(
    record: &StudentRecord,
    draft: &CourseDraft,
    command: EditCommand,
) -> ScheduleResult<Applied> {
    debug!(student = %record.student_id, ?command, "Applying edit command");

    match command {
        EditCommand::StartCourse { name } => Ok(Applied {
            record: record.clone(),
            draft: CourseDraft::new(name),
        }),
        EditCommand::AddSection(section) => add_section(record, draft, section),
        EditCommand::RenameDraft { name } => rename_draft(record, draft, &name),
        EditCommand::RemoveSection(index) => remove_section(record, draft, index),
        EditCommand::SaveCourse => save_course(record, draft),
        EditCommand::EditCourse { name } => {
            let course = record
                .course(&name)
                .ok_or_else(|| ScheduleError::NotFound(format!("Course '{}'", name)))?;

            Ok(Applied {
                record: record.clone(),
                draft: CourseDraft::from_course(course),
            })
        }
        EditCommand::DeleteCourse { name } => {
            let mut next = record.clone();
            next.delete_course(&name)?;

            let mut draft = draft.clone();
            if draft.original_name.as_deref() == Some(name.as_str()) {
                draft.original_name = None;
            }

            Ok(Applied {
                record: next,
                draft,
            })
        }
    }
}

fn add_section(
    record: &StudentRecord,
    draft: &CourseDraft,
    section: Section,
) -> ScheduleResult<Applied> {
    let editing = Course {
        name: draft.name.clone(),
        sections: draft.sections.clone(),
    };
    // The saved copy of a course opened for editing is replaced on commit,
    // so its sections must not block the draft.
    let others = record
        .list_courses()
        .iter()
        .filter(|course| !draft.replaces(&course.name));

    if let Some((course, existing)) = find_conflict(&section, &editing, others) {
        debug!(%section, course = %course.name, %existing, "Rejected conflicting section");
        return Err(ScheduleError::Conflict {
            section,
            course: course.name.clone(),
            existing: *existing,
        });
    }

    let mut draft = draft.clone();
    draft.sections.push(section);

    Ok(Applied {
        record: record.clone(),
        draft,
    })
}

fn rename_draft(
    record: &StudentRecord,
    draft: &CourseDraft,
    name: &str,
) -> ScheduleResult<Applied> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScheduleError::Validation("Course name must not be empty".to_string()));
    }

    let mut renamed = draft.clone();
    renamed.name = name.to_string();

    // The set of saved courses the draft replaces changes with its name, so
    // every section is checked again against the rest.
    let editing = Course {
        name: renamed.name.clone(),
        sections: Vec::new(),
    };
    for section in &renamed.sections {
        let others = record
            .list_courses()
            .iter()
            .filter(|course| !renamed.replaces(&course.name));
        if let Some((course, existing)) = find_conflict(section, &editing, others) {
            debug!(%section, course = %course.name, "Rejected rename with conflicting section");
            return Err(ScheduleError::Conflict {
                section: *section,
                course: course.name.clone(),
                existing: *existing,
            });
        }
    }

    Ok(Applied {
        record: record.clone(),
        draft: renamed,
    })
}

fn remove_section(
    record: &StudentRecord,
    draft: &CourseDraft,
    index: usize,
) -> ScheduleResult<Applied> {
    if index >= draft.sections.len() {
        return Err(ScheduleError::NotFound(format!(
            "Section #{} (draft has {} sections)",
            index + 1,
            draft.sections.len()
        )));
    }

    let mut draft = draft.clone();
    draft.sections.remove(index);

    Ok(Applied {
        record: record.clone(),
        draft,
    })
}

fn save_course(record: &StudentRecord, draft: &CourseDraft) -> ScheduleResult<Applied> {
    let course = draft.to_course()?;
    let mut next = record.clone();

    match draft.original_name.as_deref() {
        Some(original) if original != course.name => {
            // Renaming onto another saved name overwrites that course.
            if next.course(&course.name).is_some() {
                next.delete_course(&course.name)?;
            }
            next.replace_course(original, course)?;
        }
        _ => {
            next.upsert_course(course);
        }
    }

    Ok(Applied {
        record: next,
        draft: CourseDraft::default(),
    })
}
