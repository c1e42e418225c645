//! Provider interface and the single-result policy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    /// Display duration such as `5:59`; `None` for live streams.
    pub duration: Option<String>,
}

/// Failures of a search call.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure, including timeouts.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("could not decode search response: {0}")]
    Decode(String),
}

/// Search provider: free-text query in, at most `limit` ranked results out.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<VideoResult>, SearchError>;
}

/// Result of asking a provider for its top match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success(VideoResult),
    Empty,
    /// Provider failed; holds the full error detail (including the source chain).
    Failure(String),
}

/// Asks `provider` for one result and classifies the answer. Never returns an error.
#[instrument(skip(provider))]
pub async fn search_top(provider: &dyn VideoSearch, query: &str) -> SearchOutcome {
    match provider.search(query, 1).await {
        Ok(results) => match results.into_iter().next() {
            Some(top) => {
                debug!(video_id = %top.id, "top result");
                SearchOutcome::Success(top)
            }
            None => SearchOutcome::Empty,
        },
        Err(e) => SearchOutcome::Failure(error_detail(&e)),
    }
}

fn error_detail(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
