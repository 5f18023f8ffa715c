//! Durable key/value storage trait and built-in backends.
//!
//! The cart engine persists exactly two documents: the serialized line-item
//! collection and the serialized wishlist, each under a fixed string key.
//! The [`KeyValueStore`] trait keeps the engine independent of where those
//! documents live; the built-in backends cover the two cases the project
//! needs:
//!
//! - [`FileStore`] - one JSON document per key under a data directory
//! - [`MemoryStore`] - ephemeral map, used by tests and one-shot tooling

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A durable string key/value store.
///
/// Implementations are synchronous and single-writer: the cart engine runs
/// one mutation to completion before the next, so no locking discipline is
/// required of a backend.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails for a reason other than
    /// the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: each key becomes `<dir>/<key>.json`.
///
/// The layout follows this structure:
/// ```text
/// <dir>/
///     amoneph-cart.json
///     amoneph-wishlist.json
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at the given directory, creating it (and any
    /// missing parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The root directory of this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write-then-rename so a crash mid-write never leaves a truncated
        // document under the live key.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.key_path(key))?;
        tracing::debug!(key, bytes = value.len(), "persisted document");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a single key, useful for rehydration tests.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
