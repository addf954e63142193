//! Application state and the snapshot exposed to presentation.
//!
//! [`AppState`] is the single source of truth for the search term, the request
//! URL, the fetch lifecycle and the story collection. It is mutated only by
//! [`handle_event`](crate::app::handle_event). Presentation never reads it
//! directly; it renders a [`Snapshot`] instead.

use super::lifecycle::{FetchLifecycle, FetchStatus};
use super::reducer::{reduce, FetchState, StoryEvent};
use crate::domain::{Query, Story};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search endpoint prefix the term is appended to.
    pub endpoint: String,

    /// Term being edited and the committed request URL.
    pub query: Query,

    /// Ticket bookkeeping for outstanding fetches.
    pub lifecycle: FetchLifecycle,

    /// Story collection and fetch status as last reduced.
    pub stories: FetchState,

    /// Set once the initial fetch has been triggered.
    pub initialized: bool,
}

impl AppState {
    /// Creates an uninitialized state for `endpoint`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hacker_stories::app::AppState;
    /// use hacker_stories::domain::query::DEFAULT_ENDPOINT;
    ///
    /// let state = AppState::new(DEFAULT_ENDPOINT);
    /// assert!(!state.initialized);
    /// assert!(state.query.request_url.is_empty());
    /// ```
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query: Query::default(),
            lifecycle: FetchLifecycle::new(),
            stories: FetchState::default(),
            initialized: false,
        }
    }

    /// Runs the reducer and stores its result.
    pub fn apply(&mut self, event: &StoryEvent) {
        let _span = tracing::trace_span!("apply_story_event", event = ?event).entered();
        self.stories = reduce(&self.stories, event);
    }

    /// Status of the story collection.
    #[must_use]
    pub const fn status(&self) -> FetchStatus {
        self.stories.status
    }

    /// Read-only projection for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            term: self.query.term.clone(),
            request_url: self.query.request_url.clone(),
            items: self.stories.items.clone(),
            is_loading: self.stories.is_loading(),
            is_error: self.stories.is_error(),
            can_submit: self.query.can_submit(),
        }
    }
}

/// What presentation is allowed to see.
///
/// Recomputed after every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Text in the search input.
    pub term: String,

    /// URL of the committed request.
    pub request_url: String,

    /// Stories in endpoint order.
    pub items: Vec<Story>,

    /// A fetch is in flight.
    pub is_loading: bool,

    /// The last committed fetch failed.
    pub is_error: bool,

    /// The submit affordance is enabled.
    pub can_submit: bool,
}
