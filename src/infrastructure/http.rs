//! HTTP access to the search endpoint.
//!
//! The controller never talks to `reqwest` directly. It goes through the
//! [`StoryFetcher`] trait, which lets tests and embedders substitute a scripted
//! fetcher and control exactly when and in which order responses arrive.

use crate::domain::error::{Result, StoriesError};
use crate::domain::SearchResponse;
use futures_util::future::BoxFuture;
use std::time::Duration;
use tracing::Instrument;

/// Fetches and decodes one search response.
pub trait StoryFetcher: Send + Sync {
    /// Issues a GET for `url` and decodes the body as a [`SearchResponse`].
    ///
    /// The returned future owns everything it needs so it can be spawned.
    fn fetch_json(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse>>;
}

/// [`StoryFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoriesError::Network`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hacker-stories/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl StoryFetcher for HttpFetcher {
    fn fetch_json(&self, url: &str) -> BoxFuture<'static, Result<SearchResponse>> {
        let client = self.client.clone();
        let url = url.to_string();

        let span = tracing::debug_span!("http_fetch", url = %url);

        Box::pin(
            async move {
                let response = client
                    .get(&url)
                    .header("Accept", "application/json")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(StoriesError::Network(format!(
                        "search endpoint returned {status}"
                    )));
                }

                let body = response.json::<SearchResponse>().await?;
                tracing::debug!(hits = body.hits.len(), "search response decoded");
                Ok(body)
            }
            .instrument(span),
        )
    }
}
