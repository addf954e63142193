//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire dataset
//! - **Best for**: a handful of small values written on user input

use crate::domain::error::{Result, StoriesError};
use crate::storage::backend::KeyValueStore;
use crate::storage::models::EntryRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values, indexed by key.
    #[serde(default)]
    entries: HashMap<String, EntryRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The entire dataset is kept in memory and persisted on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "search": {
///       "value": "React",
///       "updated_at": 1700000000
///     }
///   }
/// }
/// ```
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStore {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is only created on the first write. Parent directories are created
    /// automatically.
    ///
    /// A file that is not valid JSON is renamed to `<name>.corrupt` and the
    /// store starts empty, so the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File permissions prevent reading, or a corrupt file cannot be moved aside
    /// - File was written by a newer format version
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hacker_stories::storage::JsonStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonStore::new(PathBuf::from("/tmp/hacker-stories/state.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                let backup = corrupt_path(path);
                tracing::warn!(
                    path = ?path,
                    backup = ?backup,
                    error = %e,
                    "state file is not valid JSON, starting empty"
                );
                std::fs::rename(path, &backup)?;
                return Ok(StorageData::default());
            }
        };

        if data.version > FORMAT_VERSION {
            return Err(StoriesError::Storage(format!(
                "unsupported storage version {} (expected <= {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never observed half-written.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StoriesError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

/// `state.json` -> `state.json.corrupt`
fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_get", key = %key).entered();

        let value = self.data.entries.get(key).map(|entry| entry.value.clone());

        tracing::debug!(found = value.is_some(), "lookup complete");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value_len = value.len()).entered();

        if self
            .data
            .entries
            .get(key)
            .is_some_and(|entry| entry.value == value)
        {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        self.data
            .entries
            .insert(key.to_string(), EntryRecord::new(value));
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
