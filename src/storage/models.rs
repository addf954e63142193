//! Storage record models for the persistence layer.
//!
//! These types describe what is written to disk. They are kept apart from the
//! key-value API so the file format can carry bookkeeping (timestamps) that
//! callers never see.

use serde::{Deserialize, Serialize};

/// A single persisted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Stored string value.
    pub value: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl EntryRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use hacker_stories::storage::EntryRecord;
    ///
    /// let record = EntryRecord::new("React");
    /// assert_eq!(record.value, "React");
    /// assert!(record.updated_at > 0);
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
