pub mod autosave;
pub mod models;
pub mod repositories;

pub mod mock;

use std::path::PathBuf;
use std::sync::Arc;

use repositories::{JsonFileStore, StudentRepository};
use tracing::info;

/// Opens the JSON store at `path`. The file is created on first save.
pub fn open_store(path: impl Into<PathBuf>) -> Arc<dyn StudentRepository> {
    let store = JsonFileStore::new(path);
    info!(path = %store.path().display(), "Using schedule data file");
    Arc::new(store)
}
