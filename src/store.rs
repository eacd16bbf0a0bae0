//! Key-value persistence.
//!
//! The persisted records mirror the local-storage shape the UI expects:
//! string keys mapping to JSON-encoded values. Missing or corrupt records
//! are recovered by falling back to defaults, never surfaced as fatal.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Record key for the progression stats.
pub const STATS_KEY: &str = "gameStats";
/// Record key for the saved-password list.
pub const SAVED_PASSWORDS_KEY: &str = "savedPasswords";
/// Legacy record key superseded by `gameStats.highestLevel`. Read once
/// for migration, never written back.
pub const LEGACY_LEVEL_KEY: &str = "arcadeLevel";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write store file: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("Failed to encode store records: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// String key to JSON-string value storage.
///
/// Writes happen synchronously after each mutating operation; a failed
/// write is a soft error the caller logs and moves past.
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, used in tests and as the no-persistence fallback.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.records.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per file, rewritten on every
/// mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens a store at `path`.
    ///
    /// A missing file is a fresh store; an unreadable or corrupt file is
    /// treated the same way rather than failing startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Store file corrupt, starting fresh: {}", _e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, records }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.records.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
