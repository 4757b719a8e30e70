//! Periodic flush of the active student's record.
//!
//! The active record lives in a [`SharedSession`]. Both the editor and the
//! auto-save task go through its mutex, and a flush holds the lock for the
//! whole write, so a save can never capture an edit halfway through.

use std::sync::Arc;
use std::time::Duration;

use coursesched_core::errors::{ScheduleError, ScheduleResult};
use coursesched_core::models::student::StudentRecord;
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::repositories::StudentRepository;

/// The active student's record, `None` until a student is loaded.
pub type SharedSession = Arc<Mutex<Option<StudentRecord>>>;

pub fn new_session() -> SharedSession {
    Arc::new(Mutex::new(None))
}

/// Saves the active record while holding the session lock.
///
/// Returns `false` when no student is active.
pub async fn flush(
    repository: &dyn StudentRepository,
    session: &SharedSession,
) -> ScheduleResult<bool> {
    let guard = session.lock().await;
    let Some(record) = guard.as_ref() else {
        return Ok(false);
    };

    repository.save(record).await?;
    Ok(true)
}

/// Handle to a running auto-save task. Dropping it also stops the task.
pub struct AutosaveHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Stops the task and waits for an in-flight flush to finish.
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "Auto-save task ended abnormally");
        }
    }
}

/// Starts flushing `session` every `period`. The first flush happens one
/// full period after start. A zero period is rejected.
pub fn spawn_autosave(
    repository: Arc<dyn StudentRepository>,
    session: SharedSession,
    period: Duration,
) -> ScheduleResult<AutosaveHandle> {
    if period.is_zero() {
        return Err(ScheduleError::Validation(
            "Auto-save period must be positive".to_string(),
        ));
    }

    let (shutdown, mut stop) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    match flush(repository.as_ref(), &session).await {
                        Ok(true) => debug!("Auto-saved active student"),
                        Ok(false) => {}
                        Err(e) => warn!(error = %e, "Auto-save failed"),
                    }
                }
            }
        }

        debug!("Auto-save stopped");
    });

    Ok(AutosaveHandle {
        shutdown: Some(shutdown),
        task,
    })
}
