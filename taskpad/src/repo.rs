//! Task list persistence
//!
//! The whole list is serialized as one JSON array under a single fixed key.
//! Loading is total: missing, unreadable, or corrupt data falls back to an
//! empty list instead of an error. Data loss is the accepted degradation on
//! corruption; a crash is not.

use std::path::Path;

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::domain::Task;
use crate::kv::{FileStore, KeyValueStore};

/// Fixed storage key for the serialized task list
pub const TASKS_KEY: &str = "tasks_list";

/// Persistence adapter over a key-value store
pub struct TaskRepository {
    kv: Box<dyn KeyValueStore>,
}

impl TaskRepository {
    /// Build a repository over any key-value backend
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Convenience: a file-backed repository rooted at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Box::new(FileStore::open(path)?)))
    }

    /// Persist `snapshot` as a JSON array of `{id, text, completed}` objects
    /// in list order, replacing any previous value
    pub fn save(&self, snapshot: &[Task]) -> Result<()> {
        let json = serde_json::to_string(snapshot).context("Failed to serialize task list")?;
        self.kv.put(TASKS_KEY, &json).context("Failed to persist task list")?;
        debug!(count = snapshot.len(), "Saved task list");
        Ok(())
    }

    /// Load the persisted snapshot
    ///
    /// Never fails: a missing key yields an empty list, and unreadable or
    /// malformed data is logged and discarded.
    pub fn load(&self) -> Vec<Task> {
        let value = match self.kv.get(TASKS_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted task list, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&value) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = %e, "Corrupt persisted task list, starting empty");
                Vec::new()
            }
        }
    }
}
