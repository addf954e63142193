//! Infrastructure layer for filesystem, environment and network access.
//!
//! - [`paths`]: data, state, log and config file locations
//! - [`http`]: the [`StoryFetcher`] seam and its `reqwest` implementation

pub mod http;
pub mod paths;

pub use http::{HttpFetcher, StoryFetcher};
pub use paths::{expand_tilde, get_config_path, get_data_dir, get_log_path, get_state_path};
