//! End-to-end behavior of the public controller API with a scripted network.

use futures_util::future::BoxFuture;
use hacker_stories::domain::query::DEFAULT_ENDPOINT;
use hacker_stories::domain::{RawStory, SearchResponse};
use hacker_stories::infrastructure::StoryFetcher;
use hacker_stories::storage::{JsonStore, MemoryStore, PersistedQuery};
use hacker_stories::ui::render_snapshot;
use hacker_stories::{QueryController, Result, StoriesError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::oneshot;

type Pending = (String, oneshot::Sender<Result<SearchResponse>>);

/// Holds every request until the test answers it.
#[derive(Default)]
struct Network {
    pending: Mutex<VecDeque<Pending>>,
}

impl Network {
    fn answer(&self, url: &str, result: Result<SearchResponse>) {
        let mut pending = self.pending.lock().unwrap();
        let index = pending
            .iter()
            .position(|(u, _)| u == url)
            .unwrap_or_else(|| panic!("no request for {url}"));
        let (_, tx) = pending.remove(index).unwrap();
        let _ = tx.send(result);
    }

    fn in_flight(&self) -> Vec<String> {
        self.pending.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }
}

impl StoryFetcher for Network {
    fn fetch_json(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back((url.to_string(), tx));
        Box::pin(async move { rx.await.unwrap_or_else(|_| Err(StoriesError::Network("hung up".into()))) })
    }
}

fn decode(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body).map_err(|e| StoriesError::Network(e.to_string()))
}

fn story(id: &str, title: &str) -> RawStory {
    RawStory {
        object_id: id.to_string(),
        title: title.to_string(),
        ..RawStory::default()
    }
}

fn url(term: &str) -> String {
    format!("{DEFAULT_ENDPOINT}{term}")
}

#[tokio::test]
async fn first_run_searches_react() {
    let network = Arc::new(Network::default());
    let persisted = PersistedQuery::new(Box::new(MemoryStore::default()), "search");
    let mut controller = QueryController::new(DEFAULT_ENDPOINT, persisted, network.clone());

    controller.initialize("React");
    assert_eq!(network.in_flight(), vec![url("React")]);

    network.answer(
        &url("React"),
        decode(r#"{"hits":[{"objectID":"0","title":"React","url":null,"author":"a","num_comments":null,"points":5}],"nbHits":1}"#),
    );
    controller.next_response().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].id, "0");
    assert_eq!(snapshot.items[0].title, "React");
    assert_eq!(snapshot.items[0].url, "");
    assert_eq!(snapshot.items[0].comment_count, 0);
    assert!(!snapshot.items[0].is_read);
    assert!(!snapshot.is_loading);
    assert!(!snapshot.is_error);
}

#[tokio::test]
async fn last_search_wins_even_when_answered_first() {
    let network = Arc::new(Network::default());
    let persisted = PersistedQuery::new(Box::new(MemoryStore::default()), "search");
    let mut controller = QueryController::new(DEFAULT_ENDPOINT, persisted, network.clone());
    controller.initialize("React");

    controller.on_input_change("Redux");
    controller.on_submit();
    assert_eq!(network.in_flight(), vec![url("React"), url("Redux")]);

    network.answer(&url("Redux"), Ok(SearchResponse { hits: vec![story("2", "Redux")] }));
    assert_eq!(controller.next_response().await, Some(true));
    network.answer(&url("React"), Ok(SearchResponse { hits: vec![story("1", "React")] }));
    assert_eq!(controller.next_response().await, Some(false));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].id, "2");
    assert_eq!(snapshot.request_url, url("Redux"));
}

#[tokio::test]
async fn failed_search_renders_banner_over_old_results() {
    let network = Arc::new(Network::default());
    let persisted = PersistedQuery::new(Box::new(MemoryStore::default()), "search");
    let mut controller = QueryController::new(DEFAULT_ENDPOINT, persisted, network.clone());
    controller.initialize("React");
    network.answer(&url("React"), Ok(SearchResponse { hits: vec![story("1", "Hooks")] }));
    controller.next_response().await;

    controller.on_submit();
    network.answer(&url("React"), decode("<html>502 Bad Gateway</html>"));
    controller.next_response().await;

    let mut out = Vec::new();
    render_snapshot(&controller.snapshot(), 80, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Something went wrong..."));
    assert!(text.contains("Hooks"));
}

#[tokio::test]
async fn term_survives_restart() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    let network = Arc::new(Network::default());

    {
        let persisted = PersistedQuery::new(Box::new(JsonStore::new(state.clone()).unwrap()), "search");
        let mut controller = QueryController::new(DEFAULT_ENDPOINT, persisted, network.clone());
        controller.initialize("React");
        controller.on_input_change("Tokio");
    }

    let persisted = PersistedQuery::new(Box::new(JsonStore::new(state).unwrap()), "search");
    let mut controller = QueryController::new(DEFAULT_ENDPOINT, persisted, network.clone());
    controller.initialize("React");

    assert_eq!(controller.snapshot().term, "Tokio");
    assert_eq!(network.in_flight().last(), Some(&url("Tokio")));
}

#[tokio::test]
async fn works_without_persistence() {
    let network = Arc::new(Network::default());
    let mut controller =
        QueryController::new(DEFAULT_ENDPOINT, PersistedQuery::unavailable("search"), network.clone());

    assert!(controller.initialize("React"));
    assert!(controller.on_input_change("Rust"));
    assert!(controller.on_submit());
    assert_eq!(network.in_flight(), vec![url("React"), url("Rust")]);
}
