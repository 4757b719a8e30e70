use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use coursesched_core::errors::ScheduleError;
use coursesched_core::models::student::StudentRecord;
use coursesched_store::autosave::{flush, new_session, spawn_autosave};
use coursesched_store::mock::repositories::MockStudentRepo;
use coursesched_store::repositories::{JsonFileStore, StudentRepository};
use tempfile::TempDir;

#[tokio::test(start_paused = true)]
async fn test_autosave_flushes_active_student_each_period() {
    let saves = Arc::new(AtomicUsize::new(0));
    let counter = saves.clone();

    let mut repo = MockStudentRepo::new();
    repo.expect_save()
        .withf(|record| record.student_id == "s1")
        .returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

    let session = new_session();
    *session.lock().await = Some(StudentRecord::new("s1"));

    let handle = spawn_autosave(Arc::new(repo), session.clone(), Duration::from_secs(5)).unwrap();

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(saves.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(12)).await;
    handle.shutdown().await;

    assert_eq!(saves.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_autosave_is_idle_without_student() {
    let mut repo = MockStudentRepo::new();
    repo.expect_save().never();

    let handle = spawn_autosave(Arc::new(repo), new_session(), Duration::from_secs(5)).unwrap();

    tokio::time::sleep(Duration::from_secs(30)).await;
    handle.shutdown().await;
}

#[tokio::test]
async fn test_autosave_rejects_zero_period() {
    let mut repo = MockStudentRepo::new();
    repo.expect_save().never();

    let result = spawn_autosave(Arc::new(repo), new_session(), Duration::ZERO);

    assert!(matches!(result, Err(ScheduleError::Validation(_))));
}

#[tokio::test(start_paused = true)]
async fn test_autosave_survives_failed_save() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let mut repo = MockStudentRepo::new();
    repo.expect_save().returning(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(ScheduleError::Storage(eyre::eyre!("disk full")))
    });

    let session = new_session();
    *session.lock().await = Some(StudentRecord::new("s1"));

    let handle = spawn_autosave(Arc::new(repo), session, Duration::from_secs(1)).unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;
    handle.shutdown().await;

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_flush_writes_session_record() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let session = new_session();

    assert!(!flush(&store, &session).await.unwrap());

    *session.lock().await = Some(StudentRecord::new("s9"));
    assert!(flush(&store, &session).await.unwrap());

    assert_eq!(store.list_students().await.unwrap(), vec!["s9"]);
}
