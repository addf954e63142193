//! Actions representing side effects to be executed by the controller.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after processing a user intent or a worker response.
//! Actions are the boundary between pure state transitions and effectful
//! operations: network fetches and persistence.
//!
//! # Example
//!
//! ```rust
//! use hacker_stories::app::Action;
//! use hacker_stories::worker::{FetchTicket, WorkerMessage};
//!
//! let ticket = FetchTicket { id: 0, url: "https://hn.algolia.com/api/v1/search?query=React".into() };
//! let actions = vec![
//!     Action::PersistTerm { term: "React".into() },
//!     Action::PostToWorker(WorkerMessage::fetch(ticket)),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a message to the fetch worker.
    ///
    /// Emitted exactly when a new request URL is committed.
    PostToWorker(WorkerMessage),

    /// Writes the search term to durable storage.
    ///
    /// Emitted on every change to the term. Failures are ignored.
    PersistTerm {
        /// Term to remember.
        term: String,
    },
}
