//! Error types for the story browser.
//!
//! This module defines the centralized error type [`StoriesError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that these errors never reach the presentation layer as-is. Network errors
//! collapse into a single undifferentiated failed fetch, and storage errors are
//! logged and swallowed at the persistence boundary.

use thiserror::Error;

/// The main error type for story browser operations.
///
/// # Examples
///
/// ```
/// use hacker_stories::StoriesError;
///
/// fn read_config() -> Result<(), StoriesError> {
///     Err(StoriesError::Config("endpoint must not be empty".to_string()))
/// }
///
/// assert!(read_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum StoriesError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the key-value backend fails, or
    /// when the on-disk state file cannot be parsed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The search request failed.
    ///
    /// Transport errors, timeouts, non-success status codes and undecodable
    /// bodies all land here. Callers above the fetch worker only ever see a
    /// failed outcome without this detail.
    #[error("Network error: {0}")]
    Network(String),

    /// Communication with the fetch worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoriesError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<toml::de::Error> for StoriesError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized `Result` type for story browser operations.
pub type Result<T> = std::result::Result<T, StoriesError>;
