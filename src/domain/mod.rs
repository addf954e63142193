//! Domain layer for the story browser.
//!
//! This module contains the core domain types, independent of the HTTP client,
//! the storage backend and the presentation layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story model and search endpoint wire records
//! - [`query`]: Search term / request URL pair and endpoint constants
//!
//! # Examples
//!
//! ```
//! use hacker_stories::domain::{Query, Story};
//! use hacker_stories::domain::query::DEFAULT_ENDPOINT;
//!
//! let query = Query::committed(DEFAULT_ENDPOINT, "React");
//! assert!(query.can_submit());
//!
//! let story = Story::new("0", "React");
//! assert!(!story.is_read);
//! ```

pub mod error;
pub mod query;
pub mod story;

pub use error::{Result, StoriesError};
pub use query::Query;
pub use story::{RawStory, SearchResponse, Story};
