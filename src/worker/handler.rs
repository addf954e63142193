//! Fetch worker implementation.
//!
//! The worker turns [`WorkerMessage::Fetch`] requests into network calls that
//! run as independent Tokio tasks, so user input keeps being processed while a
//! fetch is outstanding. Each finished call is posted back as a
//! [`WorkerResponse`] on an unbounded channel that the controller drains in
//! order.
//!
//! The worker has no notion of which fetch is current. Every response is
//! delivered; discarding stale ones is the lifecycle machine's job.

use crate::domain::error::Result;
use crate::domain::SearchResponse;
use crate::infrastructure::StoryFetcher;
use crate::worker::{FetchOutcome, FetchTicket, WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Spawns fetches and reports their outcomes.
#[derive(Clone)]
pub struct FetchWorker {
    /// Network capability used for every request.
    fetcher: Arc<dyn StoryFetcher>,

    /// Channel back to the controller.
    responses: mpsc::UnboundedSender<WorkerResponse>,
}

impl FetchWorker {
    /// Creates a worker and the receiving end of its response channel.
    #[must_use]
    pub fn new(fetcher: Arc<dyn StoryFetcher>) -> (Self, mpsc::UnboundedReceiver<WorkerResponse>) {
        let (responses, rx) = mpsc::unbounded_channel();
        (Self { fetcher, responses }, rx)
    }

    /// Collapses a fetch result into the outcome the state machine sees.
    ///
    /// The error is logged here and then dropped.
    fn into_outcome(ticket: &FetchTicket, result: Result<SearchResponse>) -> FetchOutcome {
        match result {
            Ok(response) => {
                let stories = response.into_stories();
                tracing::debug!(
                    ticket_id = ticket.id,
                    story_count = stories.len(),
                    "fetch succeeded"
                );
                FetchOutcome::Succeeded(stories)
            }
            Err(e) => {
                tracing::warn!(ticket_id = ticket.id, url = %ticket.url, error = %e, "fetch failed");
                FetchOutcome::Failed
            }
        }
    }

    /// Processes a worker message.
    ///
    /// Must be called from within a Tokio runtime: each fetch is spawned as its
    /// own task and this method returns immediately.
    pub fn handle_message(&self, message: WorkerMessage) {
        match message {
            WorkerMessage::Fetch { ticket } => self.spawn_fetch(ticket),
        }
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let span = tracing::debug_span!("worker_fetch", ticket_id = ticket.id, url = %ticket.url);
        let request = self.fetcher.fetch_json(&ticket.url);
        let responses = self.responses.clone();

        tokio::spawn(
            async move {
                let result = request.await;
                let outcome = Self::into_outcome(&ticket, result);

                if responses
                    .send(WorkerResponse::Fetched { ticket, outcome })
                    .is_err()
                {
                    tracing::debug!("controller gone, dropping fetch response");
                }
            }
            .instrument(span),
        );
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("closed", &self.responses.is_closed())
            .finish_non_exhaustive()
    }
}
