//! Fetch worker message types.
//!
//! This module defines the request and response protocol between the
//! controller and the background fetch worker. Every request carries the
//! [`FetchTicket`] it was started with, and the response echoes it back so the
//! lifecycle machine can decide whether the result is still current.

use crate::domain::Story;

/// Identity of one started fetch.
///
/// Ticket ids increase monotonically per lifecycle. Two submits of the same
/// term produce two tickets with the same `url` and different `id`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Sequence number assigned by the lifecycle machine.
    pub id: u64,

    /// Request URL being fetched.
    pub url: String,
}

/// Result of one fetch as seen by the state machine.
///
/// Failure deliberately carries no detail: timeouts, HTTP errors and decode
/// errors all look the same to everything above the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint answered; stories are in endpoint order.
    Succeeded(Vec<Story>),

    /// The request failed for any reason.
    Failed,
}

/// Messages sent from the controller to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Perform the network call for a freshly started ticket.
    Fetch {
        /// Ticket returned by the lifecycle machine.
        ticket: FetchTicket,
    },
}

impl WorkerMessage {
    /// Creates a `Fetch` message.
    #[must_use]
    pub const fn fetch(ticket: FetchTicket) -> Self {
        Self::Fetch { ticket }
    }
}

/// Responses sent from the fetch worker back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A fetch finished, successfully or not.
    Fetched {
        /// Ticket the fetch was started with.
        ticket: FetchTicket,

        /// What happened.
        outcome: FetchOutcome,
    },
}
