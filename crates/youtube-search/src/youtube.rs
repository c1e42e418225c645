//! YouTube web search client.
//!
//! Posts to the `youtubei/v1/search` endpoint used by the YouTube web client, restricted to
//! videos, and reads `videoRenderer` entries out of the nested response.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::provider::{SearchError, VideoResult, VideoSearch};

pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

const SEARCH_PATH: &str = "/youtubei/v1/search?prettyPrint=false";
const CLIENT_NAME: &str = "WEB";
const CLIENT_VERSION: &str = "2.20240726.00.00";
/// Search filter selecting videos only.
const VIDEOS_ONLY_PARAMS: &str = "EgIQAQ%3D%3D";

/// Connection settings for [`YouTubeSearch`].
#[derive(Debug, Clone)]
pub struct YouTubeSearchConfig {
    /// Scheme and host, without trailing slash.
    pub base_url: String,
    /// Interface language (`hl`).
    pub language: String,
    /// Content region (`gl`).
    pub region: String,
    pub timeout: Duration,
}

impl Default for YouTubeSearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            region: "US".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// YouTube search client.
#[derive(Debug, Clone)]
pub struct YouTubeSearch {
    client: Client,
    config: YouTubeSearchConfig,
}

impl YouTubeSearch {
    pub fn new(config: YouTubeSearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), SEARCH_PATH)
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<VideoResult>, SearchError> {
        let request = SearchRequest {
            context: RequestContext {
                client: ClientInfo {
                    client_name: CLIENT_NAME,
                    client_version: CLIENT_VERSION,
                    hl: &self.config.language,
                    gl: &self.config.region,
                },
            },
            query,
            params: VIDEOS_ONLY_PARAMS,
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "YouTube search returned error status");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        let results: Vec<VideoResult> = parsed.videos().take(limit).collect();
        info!(results = results.len(), "YouTube search done");
        Ok(results)
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    context: RequestContext<'a>,
    query: &'a str,
    params: &'a str,
}

#[derive(Debug, Serialize)]
struct RequestContext<'a> {
    client: ClientInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_name: &'a str,
    client_version: &'a str,
    hl: &'a str,
    gl: &'a str,
}

// Response path:
// contents.twoColumnSearchResultsRenderer.primaryContents.sectionListRenderer
//   .contents[].itemSectionRenderer.contents[].videoRenderer
// Every level is optional; a missing level means no results.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SearchResponse {
    contents: Option<ResponseContents>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResponseContents {
    two_column_search_results_renderer: Option<TwoColumnRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TwoColumnRenderer {
    primary_contents: Option<PrimaryContents>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PrimaryContents {
    section_list_renderer: Option<SectionListRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SectionListRenderer {
    contents: Vec<SectionItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SectionItem {
    item_section_renderer: Option<ItemSectionRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ItemSectionRenderer {
    contents: Vec<ItemContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ItemContent {
    video_renderer: Option<VideoRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VideoRenderer {
    video_id: String,
    title: TextRuns,
    length_text: Option<TextRuns>,
}

/// YouTube text node: either `simpleText` or a list of `runs`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TextRuns {
    simple_text: Option<String>,
    runs: Vec<TextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextRun {
    text: String,
}

impl TextRuns {
    fn text(&self) -> String {
        match &self.simple_text {
            Some(s) => s.clone(),
            None => self.runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

impl SearchResponse {
    fn videos(self) -> impl Iterator<Item = VideoResult> {
        self.contents
            .and_then(|c| c.two_column_search_results_renderer)
            .and_then(|r| r.primary_contents)
            .and_then(|p| p.section_list_renderer)
            .map(|s| s.contents)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|section| section.item_section_renderer)
            .flat_map(|items| items.contents)
            .filter_map(|item| item.video_renderer)
            .filter(|v| !v.video_id.is_empty())
            .map(|v| VideoResult {
                title: v.title.text(),
                duration: v
                    .length_text
                    .map(|t| t.text())
                    .filter(|d| !d.is_empty()),
                id: v.video_id,
            })
    }
}
