use std::sync::Arc;

use coursesched_core::commands::{EditCommand, apply};
use coursesched_core::engine::generate_schedules;
use coursesched_core::errors::{ScheduleError, ScheduleResult};
use coursesched_core::models::draft::CourseDraft;
use coursesched_store::autosave::{SharedSession, flush};
use coursesched_store::repositories::StudentRepository;
use tracing::{debug, info};

use crate::commands::{HELP, ShellCommand};
use crate::render;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit(String),
}

/// State behind one interactive shell: the active student (shared with the
/// auto-save task) and the course being edited.
pub struct Session {
    repository: Arc<dyn StudentRepository>,
    active: SharedSession,
    draft: CourseDraft,
}

fn no_active_student() -> ScheduleError {
    ScheduleError::Validation("No active student, load one with `student <id>`".to_string())
}

impl Session {
    pub fn new(repository: Arc<dyn StudentRepository>, active: SharedSession) -> Self {
        Self {
            repository,
            active,
            draft: CourseDraft::default(),
        }
    }

    pub fn active(&self) -> &SharedSession {
        &self.active
    }

    pub fn draft(&self) -> &CourseDraft {
        &self.draft
    }

    /// Runs one command. Errors leave the session unchanged.
    pub async fn handle(&mut self, command: ShellCommand) -> ScheduleResult<Outcome> {
        debug!(?command, "Handling shell command");

        let message = match command {
            ShellCommand::Student(student_id) => self.load_student(&student_id).await?,
            ShellCommand::Save => self.save().await?,
            ShellCommand::Users => {
                let students = self.repository.list_students().await?;
                render::render_users(&students)
            }
            ShellCommand::Edit(edit) => self.edit(edit).await?,
            ShellCommand::Draft => render::render_draft(&self.draft),
            ShellCommand::Courses => {
                let guard = self.active.lock().await;
                let record = guard.as_ref().ok_or_else(no_active_student)?;
                render::render_courses(record)
            }
            ShellCommand::Generate => {
                let guard = self.active.lock().await;
                let record = guard.as_ref().ok_or_else(no_active_student)?;
                if record.is_empty() {
                    format!("No courses found for student {}.\n", record.student_id)
                } else {
                    let schedules = generate_schedules(record.list_courses());
                    render::render_schedules(&record.student_id, &schedules)
                }
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => {
                self.close().await?;
                return Ok(Outcome::Quit("Goodbye.\n".to_string()));
            }
        };

        Ok(Outcome::Continue(message))
    }

    /// Flushes the active student, if any.
    pub async fn close(&self) -> ScheduleResult<bool> {
        flush(self.repository.as_ref(), &self.active).await
    }

    async fn load_student(&mut self, student_id: &str) -> ScheduleResult<String> {
        let mut guard = self.active.lock().await;

        // Save the outgoing student first so switching never drops edits.
        if let Some(current) = guard.as_ref() {
            self.repository.save(current).await?;
        }

        let record = self.repository.load(student_id).await?;
        let courses = record.list_courses().len();
        *guard = Some(record);
        self.draft = CourseDraft::default();

        info!(student_id, courses, "Active student changed");
        Ok(format!(
            "Loaded data for student ID: {} ({} courses)\n",
            student_id, courses
        ))
    }

    async fn save(&self) -> ScheduleResult<String> {
        let guard = self.active.lock().await;
        let record = guard.as_ref().ok_or_else(no_active_student)?;
        self.repository.save(record).await?;
        Ok(format!("Data saved for student ID '{}'.\n", record.student_id))
    }

    async fn edit(&mut self, command: EditCommand) -> ScheduleResult<String> {
        let mut guard = self.active.lock().await;
        let record = guard.as_ref().ok_or_else(no_active_student)?;

        let message = match &command {
            EditCommand::StartCourse { name } => format!("Editing new course '{}'.\n", name.trim()),
            EditCommand::AddSection(section) => {
                format!("Added section {} to '{}'.\n", section, self.draft.name)
            }
            EditCommand::RenameDraft { name } => format!(
                "Course '{}' renamed to '{}'.\n",
                self.draft.name,
                name.trim()
            ),
            EditCommand::RemoveSection(index) => format!("Removed section #{}.\n", index + 1),
            EditCommand::SaveCourse => format!(
                "Course '{}' saved/updated for student {}.\n",
                self.draft.name.trim(),
                record.student_id
            ),
            EditCommand::EditCourse { name } => format!(
                "Course '{}' loaded for editing. Make changes and `commit`.\n",
                name
            ),
            EditCommand::DeleteCourse { name } => format!("Course '{}' deleted.\n", name),
        };

        let applied = apply(record, &self.draft, command)?;
        *guard = Some(applied.record);
        self.draft = applied.draft;

        Ok(message)
    }
}
