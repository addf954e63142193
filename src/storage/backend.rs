//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that abstracts over durable
//! string storage. The controller only needs to remember one value (the last
//! search term), so the trait is deliberately a plain key-value contract with no
//! knowledge of what is being stored.

use crate::domain::error::Result;

/// Durable string key-value storage.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map
///
/// # Examples
///
/// ```
/// use hacker_stories::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("search", "Rust")?;
/// assert_eq!(store.get("search")?, Some("Rust".to_string()));
/// # Ok::<(), hacker_stories::StoriesError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
