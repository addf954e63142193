//! Best-effort persistence of the last search term.
//!
//! [`PersistedQuery`] sits between the controller and a [`KeyValueStore`]. It
//! turns every backend failure into "absent" on read and into a logged no-op on
//! write, so a broken or missing state file can never interrupt the user.

use crate::storage::backend::KeyValueStore;

/// Remembers one string value under a fixed key.
pub struct PersistedQuery {
    /// Backing store, or `None` if it could not be opened.
    backend: Option<Box<dyn KeyValueStore>>,

    /// Key under which the term is stored.
    key: String,
}

impl PersistedQuery {
    /// Wraps an opened backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use hacker_stories::storage::{MemoryStore, PersistedQuery};
    ///
    /// let mut persisted = PersistedQuery::new(Box::new(MemoryStore::default()), "search");
    /// assert_eq!(persisted.read(), None);
    /// persisted.write("Rust");
    /// assert_eq!(persisted.read(), Some("Rust".to_string()));
    /// ```
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            key: key.into(),
        }
    }

    /// A persisted query with no backend: reads are absent, writes are dropped.
    pub fn unavailable(key: impl Into<String>) -> Self {
        Self {
            backend: None,
            key: key.into(),
        }
    }

    /// Key used for reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a backend is attached.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Reads the stored term.
    ///
    /// Returns `None` if nothing was stored, or if the backend is unavailable
    /// or fails. Callers fall back to their own default.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read persisted term");
                None
            }
        }
    }

    /// Stores the term. Failures are logged and otherwise ignored.
    pub fn write(&mut self, value: &str) {
        let Some(backend) = self.backend.as_mut() else {
            tracing::trace!(key = %self.key, "no backend, dropping write");
            return;
        };
        if let Err(e) = backend.set(&self.key, value) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist term");
        }
    }
}

impl std::fmt::Debug for PersistedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedQuery")
            .field("key", &self.key)
            .field("available", &self.is_available())
            .finish()
    }
}
