//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user intents and
//! worker responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation layer or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State changes go through the lifecycle machine and the reducer
//! 4. Actions are collected and returned for execution
//!
//! # Ordering Contract
//!
//! Typing never causes network traffic. The only events that emit
//! [`Action::PostToWorker`] are [`Event::Initialize`] and a non-empty
//! [`Event::Submit`], and they emit it exactly when they commit a new
//! request URL.
//!
//! # Example
//!
//! ```rust
//! use hacker_stories::app::{handle_event, AppState, Event};
//! use hacker_stories::domain::query::DEFAULT_ENDPOINT;
//!
//! let mut state = AppState::new(DEFAULT_ENDPOINT);
//! let (should_render, actions) = handle_event(&mut state, &Event::InputChanged("Rust".into()))?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1); // persist only, no fetch
//! # Ok::<(), hacker_stories::StoriesError>(())
//! ```

use super::reducer::StoryEvent;
use crate::app::{Action, AppState};
use crate::domain::error::{Result, StoriesError};
use crate::domain::Query;
use crate::worker::{FetchOutcome, WorkerMessage, WorkerResponse};

/// Events triggered by user intents or worker responses.
///
/// Events are processed strictly in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Sets the initial term and triggers the first fetch.
    ///
    /// Only the first `Initialize` has an effect.
    Initialize {
        /// Persisted term, or the default when nothing was persisted.
        term: String,
    },

    /// The search input changed.
    InputChanged(String),

    /// The search form was submitted.
    Submit,

    /// Flip the read flag of a story.
    ToggleRead(String),

    /// Drop a story from the list.
    RemoveItem(String),

    /// Wraps a response from the fetch worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned boolean tells the caller whether anything visible changed.
///
/// # Errors
///
/// Returns [`StoriesError::Worker`] if the worker reports a ticket that was
/// never issued. Stale tickets are not errors; they are dropped silently.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Initialize { term } => {
            if state.initialized {
                tracing::debug!("already initialized, ignoring");
                return Ok((false, vec![]));
            }
            state.initialized = true;
            state.query = Query::committed(&state.endpoint, term.clone());

            tracing::debug!(term = %term, request_url = %state.query.request_url, "initialized query");

            let fetch = start_fetch(state);
            Ok((
                true,
                vec![
                    Action::PersistTerm { term: term.clone() },
                    fetch,
                ],
            ))
        }
        Event::InputChanged(term) => {
            if &state.query.term == term {
                return Ok((false, vec![]));
            }
            state.query.term.clone_from(term);

            tracing::trace!(term = %term, "search term updated");

            Ok((true, vec![Action::PersistTerm { term: term.clone() }]))
        }
        Event::Submit => {
            let endpoint = state.endpoint.clone();
            let Some(url) = state.query.commit(&endpoint) else {
                tracing::debug!("submit rejected, empty term");
                return Ok((false, vec![]));
            };

            tracing::debug!(request_url = %url, "submit accepted");
            Ok((true, vec![start_fetch(state)]))
        }
        Event::ToggleRead(id) => Ok((apply_local(state, &StoryEvent::ToggleRead(id.clone())), vec![])),
        Event::RemoveItem(id) => Ok((apply_local(state, &StoryEvent::RemoveItem(id.clone())), vec![])),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::Fetched { ticket, outcome } => {
                if !state.lifecycle.has_issued(ticket) {
                    return Err(StoriesError::Worker(format!(
                        "response for unknown ticket {}",
                        ticket.id
                    )));
                }

                match state.lifecycle.resolve(ticket, outcome.clone()) {
                    Some(FetchOutcome::Succeeded(stories)) => {
                        tracing::debug!(story_count = stories.len(), "committing stories");
                        state.apply(&StoryEvent::FetchSucceeded(stories));
                        Ok((true, vec![]))
                    }
                    Some(FetchOutcome::Failed) => {
                        tracing::debug!("committing failure");
                        state.apply(&StoryEvent::FetchFailed);
                        Ok((true, vec![]))
                    }
                    None => Ok((false, vec![])),
                }
            }
        },
    }
}

/// Starts a fetch for the committed URL and returns the worker action.
fn start_fetch(state: &mut AppState) -> Action {
    let ticket = state.lifecycle.start(state.query.request_url.clone());
    state.apply(&StoryEvent::FetchStarted);
    Action::PostToWorker(WorkerMessage::fetch(ticket))
}

/// Applies a local intent and reports whether the collection changed.
fn apply_local(state: &mut AppState, event: &StoryEvent) -> bool {
    let before = state.stories.clone();
    state.apply(event);
    let changed = state.stories != before;
    if !changed {
        tracing::debug!(event = ?event, "no story with that id");
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::lifecycle::FetchStatus;
    use crate::domain::query::DEFAULT_ENDPOINT;
    use crate::domain::Story;
    use crate::worker::FetchTicket;

    fn initialized(term: &str) -> (AppState, FetchTicket) {
        let mut state = AppState::new(DEFAULT_ENDPOINT);
        let (_, actions) = handle_event(&mut state, &Event::Initialize { term: term.to_string() }).unwrap();
        (state, fetched_ticket(&actions))
    }

    fn fetched_ticket(actions: &[Action]) -> FetchTicket {
        actions
            .iter()
            .find_map(|a| match a {
                Action::PostToWorker(WorkerMessage::Fetch { ticket }) => Some(ticket.clone()),
                Action::PersistTerm { .. } => None,
            })
            .expect("no fetch action")
    }

    fn fetched(ticket: &FetchTicket, stories: Vec<Story>) -> Event {
        Event::WorkerResponse(WorkerResponse::Fetched {
            ticket: ticket.clone(),
            outcome: FetchOutcome::Succeeded(stories),
        })
    }

    #[test]
    fn initialize_persists_and_fetches_once() {
        let mut state = AppState::new(DEFAULT_ENDPOINT);

        let (render, actions) =
            handle_event(&mut state, &Event::Initialize { term: "React".to_string() }).unwrap();

        assert!(render);
        assert_eq!(actions[0], Action::PersistTerm { term: "React".to_string() });
        assert_eq!(fetched_ticket(&actions).url, "https://hn.algolia.com/api/v1/search?query=React");
        assert_eq!(state.status(), FetchStatus::Loading);

        let (render, actions) =
            handle_event(&mut state, &Event::Initialize { term: "Redux".to_string() }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.query.term, "React");
    }

    #[test]
    fn typing_never_fetches_or_moves_url() {
        let (mut state, _) = initialized("React");
        let url = state.query.request_url.clone();

        for term in ["R", "Ru", "Rus", "Rust", ""] {
            let (_, actions) = handle_event(&mut state, &Event::InputChanged(term.to_string())).unwrap();
            assert_eq!(actions, vec![Action::PersistTerm { term: term.to_string() }]);
            assert_eq!(state.query.request_url, url);
        }
    }

    #[test]
    fn unchanged_input_is_quiet() {
        let (mut state, _) = initialized("React");
        let (render, actions) = handle_event(&mut state, &Event::InputChanged("React".to_string())).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_commits_url_and_starts_loading() {
        let (mut state, first) = initialized("React");
        handle_event(&mut state, &fetched(&first, vec![Story::new("0", "React")])).unwrap();
        handle_event(&mut state, &Event::InputChanged("Rust".to_string())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        assert_eq!(state.query.request_url, "https://hn.algolia.com/api/v1/search?query=Rust");
        assert_eq!(fetched_ticket(&actions).url, state.query.request_url);
        assert_eq!(state.status(), FetchStatus::Loading);
        assert_eq!(state.stories.items.len(), 1);
    }

    #[test]
    fn empty_submit_is_rejected() {
        let (mut state, first) = initialized("React");
        handle_event(&mut state, &fetched(&first, vec![])).unwrap();
        handle_event(&mut state, &Event::InputChanged(String::new())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.status(), FetchStatus::Succeeded);
        assert!(!state.snapshot().can_submit);
    }

    #[test]
    fn stale_response_is_dropped_silently() {
        let (mut state, a) = initialized("React");
        handle_event(&mut state, &Event::InputChanged("Rust".to_string())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let b = fetched_ticket(&actions);

        let (render, _) = handle_event(&mut state, &fetched(&b, vec![Story::new("b", "Rust")])).unwrap();
        assert!(render);

        let (render, actions) = handle_event(&mut state, &fetched(&a, vec![Story::new("a", "React")])).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.stories.items[0].id, "b");
        assert_eq!(state.status(), FetchStatus::Succeeded);
    }

    #[test]
    fn failure_keeps_items() {
        let (mut state, first) = initialized("React");
        handle_event(&mut state, &fetched(&first, vec![Story::new("0", "React")])).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let second = fetched_ticket(&actions);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Fetched { ticket: second, outcome: FetchOutcome::Failed }),
        )
        .unwrap();

        let snapshot = state.snapshot();
        assert!(snapshot.is_error);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[test]
    fn unknown_ticket_is_an_error() {
        let (mut state, _) = initialized("React");
        let bogus = FetchTicket { id: 99, url: "x".to_string() };

        let result = handle_event(&mut state, &fetched(&bogus, vec![]));

        assert!(matches!(result, Err(StoriesError::Worker(_))));
        assert_eq!(state.status(), FetchStatus::Loading);
    }

    #[test]
    fn toggle_and_remove_do_not_touch_network() {
        let (mut state, first) = initialized("React");
        handle_event(&mut state, &fetched(&first, vec![Story::new("0", "React"), Story::new("1", "Redux")])).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::ToggleRead("1".to_string())).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.stories.items[1].is_read);

        let (render, actions) = handle_event(&mut state, &Event::RemoveItem("0".to_string())).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.stories.items.len(), 1);

        let (render, _) = handle_event(&mut state, &Event::RemoveItem("missing".to_string())).unwrap();
        assert!(!render);
    }

    #[test]
    fn lifecycle_and_collection_status_agree() {
        fn failed(ticket: &FetchTicket) -> Event {
            Event::WorkerResponse(WorkerResponse::Fetched {
                ticket: ticket.clone(),
                outcome: FetchOutcome::Failed,
            })
        }

        let mut state = AppState::new(DEFAULT_ENDPOINT);
        assert_eq!(state.lifecycle.status(), state.status());

        let (_, actions) = handle_event(&mut state, &Event::Initialize { term: "React".to_string() }).unwrap();
        let a = fetched_ticket(&actions);
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let b = fetched_ticket(&actions);

        let bogus = FetchTicket { id: 99, url: "x".to_string() };
        let events = [
            Event::InputChanged("Rust".to_string()),
            failed(&a),
            fetched(&bogus, vec![]),
            fetched(&b, vec![Story::new("0", "Rust")]),
            fetched(&a, vec![]),
            Event::ToggleRead("0".to_string()),
            Event::Submit,
        ];

        for event in &events {
            let _ = handle_event(&mut state, event);
            assert_eq!(state.lifecycle.status(), state.status(), "after {event:?}");
        }

        let c = state.lifecycle.current().cloned().unwrap();
        handle_event(&mut state, &failed(&c)).unwrap();
        assert_eq!(state.lifecycle.status(), FetchStatus::Failed);
        assert_eq!(state.status(), FetchStatus::Failed);
    }
}
