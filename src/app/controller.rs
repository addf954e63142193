//! Query controller: the single owner of application state.
//!
//! [`QueryController`] is what a presentation layer talks to. It turns user
//! intents into [`Event`]s, runs them through [`handle_event`], and executes
//! the resulting [`Action`]s against the persisted query and the fetch worker.
//! Worker responses come back on a channel and are fed through the same path,
//! so every state change is serialized through one `&mut self`.
//!
//! ```text
//! intent ─► Event ─► handle_event ─► Actions ─┬─► PersistedQuery::write
//!                        ▲                    └─► FetchWorker::handle_message
//!                        │                                   │
//!                        └──── Event::WorkerResponse ◄───────┘
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::app::state::Snapshot;
use crate::infrastructure::StoryFetcher;
use crate::storage::PersistedQuery;
use crate::worker::{FetchWorker, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns the state and wires it to persistence and the network.
#[derive(Debug)]
pub struct QueryController {
    state: AppState,
    persisted: PersistedQuery,
    worker: FetchWorker,
    responses: mpsc::UnboundedReceiver<WorkerResponse>,
}

impl QueryController {
    /// Creates an uninitialized controller.
    ///
    /// Nothing is read or fetched until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(endpoint: impl Into<String>, persisted: PersistedQuery, fetcher: Arc<dyn StoryFetcher>) -> Self {
        let (worker, responses) = FetchWorker::new(fetcher);
        Self {
            state: AppState::new(endpoint),
            persisted,
            worker,
            responses,
        }
    }

    /// Restores the last term and starts the first fetch.
    ///
    /// Falls back to `default_term` when nothing, or an empty term, was
    /// persisted. Only the first call has an effect; it returns `true` when it
    /// did.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn initialize(&mut self, default_term: &str) -> bool {
        let term = self.persisted.read().filter(|t| !t.is_empty()).unwrap_or_else(|| {
            tracing::debug!(default_term = %default_term, "no persisted term, using default");
            default_term.to_string()
        });
        self.dispatch(&Event::Initialize { term })
    }

    /// Records a new value of the search input. Never fetches.
    pub fn on_input_change(&mut self, text: &str) -> bool {
        self.dispatch(&Event::InputChanged(text.to_string()))
    }

    /// Commits the current term and fetches it.
    ///
    /// Returns `false` without doing anything when the term is empty.
    pub fn on_submit(&mut self) -> bool {
        self.dispatch(&Event::Submit)
    }

    /// Flips the read flag of a story.
    pub fn on_toggle_read(&mut self, id: &str) -> bool {
        self.dispatch(&Event::ToggleRead(id.to_string()))
    }

    /// Removes a story from the list.
    pub fn on_remove_item(&mut self, id: &str) -> bool {
        self.dispatch(&Event::RemoveItem(id.to_string()))
    }

    /// Waits for the next worker response and applies it.
    ///
    /// Returns whether the snapshot changed, or `None` once the worker channel
    /// is closed. Stale responses yield `Some(false)`.
    pub async fn next_response(&mut self) -> Option<bool> {
        let response = self.responses.recv().await?;
        Some(self.dispatch(&Event::WorkerResponse(response)))
    }

    /// Applies every response that has already arrived without waiting.
    ///
    /// Returns whether any of them changed the snapshot.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.responses.try_recv() {
            changed |= self.dispatch(&Event::WorkerResponse(response));
        }
        changed
    }

    /// Current read-only view.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Underlying state, for inspection.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.state, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn execute_action(&mut self, action: Action) {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();
        match action {
            Action::PersistTerm { term } => self.persisted.write(&term),
            Action::PostToWorker(message) => self.worker.handle_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, StoriesError};
    use crate::domain::query::DEFAULT_ENDPOINT;
    use crate::domain::{RawStory, SearchResponse};
    use crate::storage::MemoryStore;
    use futures_util::future::BoxFuture;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    /// Fetcher whose responses are released by the test, one URL at a time.
    #[derive(Default)]
    struct ScriptedFetcher {
        pending: Mutex<HashMap<String, Vec<oneshot::Sender<Result<SearchResponse>>>>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn release(&self, url: &str, result: Result<SearchResponse>) {
            let sender = self
                .pending
                .lock()
                .unwrap()
                .get_mut(url)
                .and_then(|senders| (!senders.is_empty()).then(|| senders.remove(0)))
                .expect("no pending request for url");
            let _ = sender.send(result);
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl StoryFetcher for ScriptedFetcher {
        fn fetch_json(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse>> {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().entry(url.to_string()).or_default().push(tx);
            self.requested.lock().unwrap().push(url.to_string());
            Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(StoriesError::Network("dropped".to_string())))
            })
        }
    }

    fn hits(ids: &[&str]) -> Result<SearchResponse> {
        Ok(SearchResponse {
            hits: ids
                .iter()
                .map(|id| RawStory {
                    object_id: (*id).to_string(),
                    title: format!("story {id}"),
                    ..RawStory::default()
                })
                .collect(),
        })
    }

    fn url(term: &str) -> String {
        format!("{DEFAULT_ENDPOINT}{term}")
    }

    fn controller(store: MemoryStore) -> (QueryController, Arc<ScriptedFetcher>) {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let persisted = PersistedQuery::new(Box::new(store), "search");
        (QueryController::new(DEFAULT_ENDPOINT, persisted, fetcher.clone()), fetcher)
    }

    fn ids(snapshot: &Snapshot) -> Vec<String> {
        snapshot.items.iter().map(|s| s.id.clone()).collect()
    }

    #[tokio::test]
    async fn default_term_loads_on_startup() {
        let (mut controller, fetcher) = controller(MemoryStore::default());

        assert!(controller.initialize("React"));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.term, "React");
        assert!(snapshot.is_loading);
        assert!(snapshot.items.is_empty());
        assert_eq!(fetcher.requested(), vec![url("React")]);

        fetcher.release(&url("React"), hits(&["1", "2"]));
        assert_eq!(controller.next_response().await, Some(true));

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_error);
        assert_eq!(ids(&snapshot), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn persisted_term_wins_over_default() {
        let (mut controller, fetcher) = controller(MemoryStore::with_entry("search", "Redux"));

        controller.initialize("React");

        assert_eq!(controller.snapshot().term, "Redux");
        assert_eq!(fetcher.requested(), vec![url("Redux")]);
    }

    #[tokio::test]
    async fn empty_persisted_term_falls_back_to_default() {
        let (mut controller, fetcher) = controller(MemoryStore::with_entry("search", ""));

        controller.initialize("React");

        assert_eq!(controller.snapshot().term, "React");
        assert_eq!(fetcher.requested(), vec![url("React")]);
    }

    #[tokio::test]
    async fn initialize_runs_once() {
        let (mut controller, fetcher) = controller(MemoryStore::default());

        assert!(controller.initialize("React"));
        assert!(!controller.initialize("React"));
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[tokio::test]
    async fn typing_persists_without_fetching() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");

        controller.on_input_change("Ru");
        controller.on_input_change("Rust");

        assert_eq!(fetcher.requested(), vec![url("React")]);
        assert_eq!(controller.snapshot().request_url, url("React"));
        assert_eq!(controller.persisted.read(), Some("Rust".to_string()));
    }

    #[tokio::test]
    async fn latest_submit_wins_regardless_of_arrival_order() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");
        fetcher.release(&url("React"), hits(&["r"]));
        controller.next_response().await;

        controller.on_input_change("A");
        controller.on_submit();
        controller.on_input_change("B");
        controller.on_submit();

        fetcher.release(&url("B"), hits(&["b"]));
        assert_eq!(controller.next_response().await, Some(true));
        fetcher.release(&url("A"), hits(&["a"]));
        assert_eq!(controller.next_response().await, Some(false));

        let snapshot = controller.snapshot();
        assert_eq!(ids(&snapshot), vec!["b"]);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn stale_response_does_not_end_loading() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");

        controller.on_input_change("B");
        controller.on_submit();

        fetcher.release(&url("React"), hits(&["r"]));
        assert_eq!(controller.next_response().await, Some(false));

        let snapshot = controller.snapshot();
        assert!(snapshot.is_loading);
        assert!(snapshot.items.is_empty());
    }

    #[tokio::test]
    async fn empty_submit_is_ignored() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");

        controller.on_input_change("");
        assert!(!controller.snapshot().can_submit);
        assert!(!controller.on_submit());
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_previous_items() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");
        fetcher.release(&url("React"), hits(&["1"]));
        controller.next_response().await;

        controller.on_submit();
        fetcher.release(&url("React"), Err(StoriesError::Network("503".to_string())));
        controller.next_response().await;

        let snapshot = controller.snapshot();
        assert!(snapshot.is_error);
        assert!(!snapshot.is_loading);
        assert_eq!(ids(&snapshot), vec!["1"]);

        controller.on_submit();
        assert!(!controller.snapshot().is_error);
    }

    #[tokio::test]
    async fn local_intents_edit_the_list() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");
        fetcher.release(&url("React"), hits(&["1", "2", "3"]));
        controller.next_response().await;

        assert!(controller.on_toggle_read("2"));
        assert!(controller.snapshot().items[1].is_read);
        assert!(controller.on_remove_item("1"));
        assert_eq!(ids(&controller.snapshot()), vec!["2", "3"]);
        assert!(!controller.on_toggle_read("missing"));
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[tokio::test]
    async fn drain_applies_ready_responses() {
        let (mut controller, fetcher) = controller(MemoryStore::default());
        controller.initialize("React");
        assert!(!controller.drain_responses());

        fetcher.release(&url("React"), hits(&["1"]));
        while controller.snapshot().is_loading {
            tokio::task::yield_now().await;
            controller.drain_responses();
        }
        assert_eq!(ids(&controller.snapshot()), vec!["1"]);
    }
}
