//! Fetch lifecycle state machine.
//!
//! # State Machine
//!
//! ```text
//!          start              resolve(current, Succeeded)
//!   Idle ────────► Loading ──────────────────────────────► Succeeded
//!                   ▲  │    resolve(current, Failed)           │
//!                   │  └──────────────────────────────► Failed │
//!                   │                                     │    │
//!                   └──────────── start ──────────────────┴────┘
//! ```
//!
//! `start` while `Loading` supersedes the outstanding request. There is no
//! cancellation: the older request keeps running, and when its response
//! arrives [`FetchLifecycle::resolve`] discards it because its ticket is no
//! longer the current one.

use crate::worker::{FetchOutcome, FetchTicket};

/// Status of the most recently started fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The current request completed with data.
    Succeeded,
    /// The current request failed.
    Failed,
}

/// Issues fetch tickets and decides which responses may commit.
#[derive(Debug, Clone, Default)]
pub struct FetchLifecycle {
    status: FetchStatus,

    /// Ticket allowed to commit, while one is in flight.
    current: Option<FetchTicket>,

    /// Id for the next ticket.
    next_id: u64,
}

impl FetchLifecycle {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> FetchStatus {
        self.status
    }

    /// The in-flight ticket, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&FetchTicket> {
        self.current.as_ref()
    }

    /// Whether `ticket` was handed out by this machine.
    #[must_use]
    pub const fn has_issued(&self, ticket: &FetchTicket) -> bool {
        ticket.id < self.next_id
    }

    /// Starts a fetch for `url` and returns its ticket.
    ///
    /// Any ticket handed out earlier becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use hacker_stories::app::lifecycle::{FetchLifecycle, FetchStatus};
    ///
    /// let mut machine = FetchLifecycle::new();
    /// let first = machine.start("https://example.test/?q=a");
    /// let second = machine.start("https://example.test/?q=a");
    ///
    /// assert_eq!(machine.status(), FetchStatus::Loading);
    /// assert_ne!(first.id, second.id);
    /// assert_eq!(machine.current(), Some(&second));
    /// ```
    pub fn start(&mut self, url: impl Into<String>) -> FetchTicket {
        let ticket = FetchTicket {
            id: self.next_id,
            url: url.into(),
        };
        self.next_id = self.next_id.wrapping_add(1);

        if let Some(previous) = self.current.replace(ticket.clone()) {
            tracing::debug!(
                superseded_id = previous.id,
                superseded_url = %previous.url,
                "fetch superseded"
            );
        }
        self.status = FetchStatus::Loading;

        tracing::debug!(ticket_id = ticket.id, url = %ticket.url, "fetch started");
        ticket
    }

    /// Commits `outcome` if `ticket` is the current one.
    ///
    /// Returns the outcome to apply, or `None` when the response is stale. A
    /// stale response leaves the machine untouched.
    pub fn resolve(&mut self, ticket: &FetchTicket, outcome: FetchOutcome) -> Option<FetchOutcome> {
        if self.current.as_ref() != Some(ticket) {
            tracing::debug!(
                ticket_id = ticket.id,
                current_id = ?self.current.as_ref().map(|t| t.id),
                "discarding stale fetch response"
            );
            return None;
        }

        self.current = None;
        self.status = match outcome {
            FetchOutcome::Succeeded(_) => FetchStatus::Succeeded,
            FetchOutcome::Failed => FetchStatus::Failed,
        };

        tracing::debug!(ticket_id = ticket.id, status = ?self.status, "fetch committed");
        Some(outcome)
    }
}
