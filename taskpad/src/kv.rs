//! Local key-value storage backends
//!
//! A [`KeyValueStore`] holds one string value per key. [`FileStore`] maps
//! each key to a file under a base directory and replaces values atomically:
//! a reader never observes a partial write, and an interrupted write leaves
//! the previous value intact.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use eyre::{Context, Result};
use tracing::debug;

/// Narrow persistence seam over a local, process-private key-value store
///
/// Constructed by the embedder and injected; the core holds no global
/// storage handle.
pub trait KeyValueStore {
    /// Read the value at `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value at `key`
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-key store under a base directory
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open or create a store at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened file store");
        Ok(Self { base_path })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read key: {}", key)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key);
        let tmp = self.base_path.join(format!("{}.tmp", key));
        fs::write(&tmp, value).context(format!("Failed to write key: {}", key))?;
        // Rename is the replacement boundary: the previous value stays on
        // disk until the new one is complete.
        fs::rename(&tmp, &target).context(format!("Failed to replace key: {}", key))?;
        Ok(())
    }
}

/// In-memory store for tests and embedders that skip disk persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
