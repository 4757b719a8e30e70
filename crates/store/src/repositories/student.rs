use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use coursesched_core::errors::{ScheduleError, ScheduleResult};
use coursesched_core::models::student::StudentRecord;
use eyre::{Result, WrapErr};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::models::{StoredDocument, StoredStudent};

/// Persistence for student records.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Loads a student's record, or an empty one if nothing usable is stored.
    async fn load(&self, student_id: &str) -> ScheduleResult<StudentRecord>;

    /// Replaces the stored copy of this student's record.
    async fn save(&self, record: &StudentRecord) -> ScheduleResult<()>;

    /// Ids of every stored student, sorted.
    async fn list_students(&self) -> ScheduleResult<Vec<String>>;
}

/// Stores every student in a single JSON document.
///
/// Saves re-read the document and replace only the saving student's entry,
/// then write a sibling temporary file and rename it over the target. A reader
/// never sees a half-written document. Only a file that is not a JSON object
/// at all is treated as unreadable.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| OsString::from("schedules_data.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Raw file contents, `None` if the file does not exist.
    async fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| {
                format!("Failed to read data file {}", self.path.display())
            }),
        }
    }

    fn parse(&self, contents: &str) -> Result<StoredDocument> {
        if contents.trim().is_empty() {
            return Ok(StoredDocument::new());
        }
        serde_json::from_str(contents).wrap_err_with(|| {
            format!("Data file {} is not a valid schedule document", self.path.display())
        })
    }

    async fn read_document(&self) -> Result<StoredDocument> {
        match self.read_raw().await? {
            Some(contents) => self.parse(&contents),
            None => Ok(StoredDocument::new()),
        }
    }

    async fn write_document(&self, document: &StoredDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)
            .wrap_err("Failed to serialize schedule document")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .wrap_err_with(|| format!("Failed to write {}", temp.display()))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e).wrap_err_with(|| {
                format!("Failed to replace data file {}", self.path.display())
            });
        }

        Ok(())
    }
}

#[async_trait]
impl StudentRepository for JsonFileStore {
    async fn load(&self, student_id: &str) -> ScheduleResult<StudentRecord> {
        let mut document = match self.read_document().await {
            Ok(document) => document,
            Err(e) => {
                warn!(error = ?e, "Could not read data file, starting fresh");
                StoredDocument::new()
            }
        };

        let Some(stored) = document.remove(student_id) else {
            info!(student_id, "No saved data, starting a new record");
            return Ok(StudentRecord::new(student_id));
        };

        let record = StoredStudent::from_raw(&stored)
            .map_err(|e| ScheduleError::Validation(e.to_string()))
            .and_then(|stored| stored.into_record(student_id));

        match record {
            Ok(record) => {
                info!(
                    student_id,
                    courses = record.list_courses().len(),
                    "Loaded student data"
                );
                Ok(record)
            }
            Err(e) => {
                warn!(student_id, error = %e, "Stored data is invalid, starting fresh");
                Ok(StudentRecord::new(student_id))
            }
        }
    }

    async fn save(&self, record: &StudentRecord) -> ScheduleResult<()> {
        let mut document = match self.read_raw().await? {
            Some(contents) => self.parse(&contents).unwrap_or_else(|e| {
                warn!(error = ?e, "Replacing unreadable data file");
                StoredDocument::new()
            }),
            None => StoredDocument::new(),
        };

        let entry = StoredStudent::from(record)
            .to_raw()
            .wrap_err("Failed to serialize student data")?;
        document.insert(record.student_id.clone(), entry);
        self.write_document(&document).await?;

        debug!(
            student_id = %record.student_id,
            courses = record.list_courses().len(),
            path = %self.path.display(),
            "Saved student data"
        );
        Ok(())
    }

    async fn list_students(&self) -> ScheduleResult<Vec<String>> {
        let document = self.read_document().await?;
        Ok(document.into_keys().collect())
    }
}
