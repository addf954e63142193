//! Hacker Stories: a Hacker News story browser with a race-safe fetch core.
//!
//! Hacker Stories provides:
//! - A search term that survives restarts (persisted on every keystroke)
//! - Explicit submit: typing never hits the network
//! - A fetch lifecycle where the most recently started request always wins
//! - A pure reducer for the story list (load, toggle read, remove)
//! - A line-oriented terminal shell driving the library end to end

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - QueryController                                  │  ← Business logic
//! │  - Event handling / action dispatching              │
//! │  - Fetch lifecycle and story reducer                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View model  │   │ - JSON I/O    │   │ - Tokio tasks │
//! │ - Rendering   │   │ - Memory      │   │ - Tickets     │
//! │ - Commands    │   │ - Best effort │   │ - Responses   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, HTTP client (infrastructure/)             │
//! │  - Error types (domain/error)                       │
//! │  - Story and query models (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber to a rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, event/action model, lifecycle machine, reducer
//! - [`domain`]: Core domain types (Story, Query, errors)
//! - [`infrastructure`]: Platform paths and the HTTP fetcher
//! - [`storage`]: Key-value backends and the persisted query
//! - [`worker`]: Background fetch worker
//! - [`ui`]: View model, plain-text renderer, shell commands
//! - [`observability`]: File-based tracing setup
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/hacker-stories/config.toml` (or the
//! file named by `HACKER_STORIES_CONFIG`), then overridden by
//! `HACKER_STORIES_<FIELD>` environment variables:
//!
//! ```toml
//! endpoint = "https://hn.algolia.com/api/v1/search?query="
//! default_term = "React"
//! storage_key = "search"
//! data_dir = "~/.local/share/hacker-stories"
//! request_timeout_secs = 10
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use hacker_stories::{build_controller, Config};
//!
//! # async fn run() -> hacker_stories::Result<()> {
//! let config = Config::default();
//! let mut controller = build_controller(&config)?;
//!
//! controller.initialize(&config.default_term);
//! while controller.snapshot().is_loading {
//!     controller.next_response().await;
//! }
//! for story in controller.snapshot().items {
//!     println!("{} ({} points)", story.title, story.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, QueryController, Snapshot};
pub use domain::{Query, Result, StoriesError, Story};

use domain::query::{DEFAULT_ENDPOINT, DEFAULT_TERM, SEARCH_KEY};
use infrastructure::{get_config_path, get_state_path, HttpFetcher};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use storage::{JsonStore, PersistedQuery};

/// Prefix of environment variables overriding configuration fields.
pub const ENV_PREFIX: &str = "HACKER_STORIES_";

/// Runtime configuration.
///
/// Every field has a default, so an empty or partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint prefix; the encoded term is appended to it.
    pub endpoint: String,

    /// Term used when nothing has been persisted. Default: `"React"`
    pub default_term: String,

    /// Key the last term is stored under. Default: `"search"`
    pub storage_key: String,

    /// Override for the data directory holding `state.json` and logs.
    ///
    /// Resolved relative to the user's home directory if it starts with `~`.
    pub data_dir: Option<String>,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_term: DEFAULT_TERM.to_string(),
            storage_key: SEARCH_KEY.to_string(),
            data_dir: None,
            request_timeout_secs: 10,
            trace_level: None,
        }
    }
}

impl Config {
    /// Overlays string key/value pairs onto this configuration.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`, `default_term`, `storage_key`: ignored when empty
    /// - `data_dir`, `trace_level`: `Some` when non-empty
    /// - `request_timeout_secs`: `u64` greater than zero, otherwise ignored
    /// - unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hacker_stories::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_term".to_string(), "Rust".to_string());
    /// map.insert("request_timeout_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::default().with_pairs(&map);
    /// assert_eq!(config.default_term, "Rust");
    /// assert_eq!(config.request_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn with_pairs(mut self, pairs: &BTreeMap<String, String>) -> Self {
        if let Some(endpoint) = pairs.get("endpoint").filter(|s| !s.is_empty()) {
            self.endpoint.clone_from(endpoint);
        }
        if let Some(term) = pairs.get("default_term").filter(|s| !s.is_empty()) {
            self.default_term.clone_from(term);
        }
        if let Some(key) = pairs.get("storage_key").filter(|s| !s.is_empty()) {
            self.storage_key.clone_from(key);
        }
        if let Some(dir) = pairs.get("data_dir").filter(|s| !s.is_empty()) {
            self.data_dir = Some(dir.clone());
        }
        if let Some(timeout) = pairs
            .get("request_timeout_secs")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
        {
            self.request_timeout_secs = timeout;
        }
        if let Some(level) = pairs.get("trace_level").filter(|s| !s.is_empty()) {
            self.trace_level = Some(level.clone());
        }
        self
    }

    /// Collects `HACKER_STORIES_<FIELD>` variables as lowercase field pairs.
    #[must_use]
    pub fn env_pairs() -> BTreeMap<String, String> {
        std::env::vars()
            .filter_map(|(name, value)| {
                name.strip_prefix(ENV_PREFIX)
                    .map(|field| (field.to_ascii_lowercase(), value))
            })
            .collect()
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`StoriesError::Io`] if the file cannot be read and
    /// [`StoriesError::Config`] if it is not valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolves configuration from the default file location and environment.
    ///
    /// A missing file is not an error. Environment overrides are applied on
    /// top of whatever the file provided.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Config::load`] when the file exists but cannot
    /// be read or parsed.
    pub fn discover() -> Result<Self> {
        let base = match get_config_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };
        Ok(base.with_pairs(&Self::env_pairs()))
    }
}

/// Wires a [`QueryController`] to the JSON state file and the HTTP fetcher.
///
/// The controller is returned uninitialized; call
/// [`QueryController::initialize`] from inside a Tokio runtime.
///
/// If the state file cannot be opened the controller runs without
/// persistence instead of failing. A corrupt state file is not such a case:
/// [`JsonStore`] sets it aside and starts empty.
///
/// # Errors
///
/// Returns [`StoriesError::Network`] if the HTTP client cannot be built.
pub fn build_controller(config: &Config) -> Result<QueryController> {
    let _span = tracing::debug_span!("build_controller").entered();

    let state_path = get_state_path(config);
    let persisted = match JsonStore::new(state_path.clone()) {
        Ok(store) => PersistedQuery::new(Box::new(store), config.storage_key.clone()),
        Err(e) => {
            tracing::warn!(path = %state_path.display(), error = %e, "state file unavailable, term will not persist");
            PersistedQuery::unavailable(config.storage_key.clone())
        }
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(config.request_timeout_secs))?;

    tracing::debug!(endpoint = %config.endpoint, persisted = persisted.is_available(), "controller built");
    Ok(QueryController::new(config.endpoint.clone(), persisted, Arc::new(fetcher)))
}
