//! Persistence adapter for the task collection.
//!
//! The collection is stored as one serialized blob under a fixed file name;
//! there is no delta format and no second copy. The in-memory collection is
//! the authority; persistence is a cache of it, written best-effort after
//! every committed mutation.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::TaskRecord;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;
use thiserror::Error;

/// Default file name of the serialized task collection.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Failures of the file-backed store. Parse failures are deliberately not
/// represented here: an unreadable blob is recovered from, not reported.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read task store at {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to write task store at {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Failed to serialize task collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Contract between the session layer and whatever holds the bytes.
///
/// `load` runs once when a session opens. `save` receives the full
/// collection after every committed mutation. Implementations must
/// round-trip `dueDate`, `createdAt` and `completedAt` as timestamps that
/// parse back to the same values, not as opaque strings.
pub trait TaskStore {
    /// Returns the previously saved collection, or an empty one when no
    /// usable state exists. A blob that fails to parse is discarded and
    /// logged, never propagated as an error.
    fn load(&self) -> Result<Vec<TaskRecord>>;

    /// Serializes and writes the full collection.
    fn save(&self, tasks: &[TaskRecord]) -> Result<()>;
}

/// File-backed [`TaskStore`] keeping the whole collection as one JSON blob
/// in the application data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store under the default file name.
    pub fn new() -> Result<Self> {
        Self::with_file_name(TASKS_FILE_NAME)
    }

    /// Store under a caller-chosen file name, e.g. from configuration.
    pub fn with_file_name(file_name: &str) -> Result<Self> {
        let path = DataStorage::new().get_path(file_name)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<TaskRecord>> {
        if !self.path.exists() {
            msg_debug!(Message::TaskStoreEmpty);
            return Ok(Vec::new());
        }
        let blob = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        match serde_json::from_str::<Vec<TaskRecord>>(&blob) {
            Ok(tasks) => {
                msg_debug!(Message::TasksLoaded(tasks.len()));
                Ok(tasks)
            }
            Err(err) => {
                // Corrupted state is treated as "no saved state".
                msg_warning!(Message::TaskStoreCorrupted(err.to_string()));
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[TaskRecord]) -> Result<()> {
        let file = File::create(&self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        serde_json::to_writer_pretty(&file, &tasks).map_err(StoreError::Serialize)?;
        Ok(())
    }
}
