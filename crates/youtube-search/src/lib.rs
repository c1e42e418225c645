//! # YouTube search
//!
//! [`VideoSearch`] is the provider interface the bot depends on; [`YouTubeSearch`] implements it
//! against YouTube's web search endpoint. [`search_top`] applies the single-result policy and
//! [`music_url`] builds the YouTube Music link for a video id.
//!
//! ```rust,no_run
//! use youtube_search::{music_url, search_top, SearchOutcome, YouTubeSearch, YouTubeSearchConfig};
//!
//! async fn find_song() -> Result<(), youtube_search::SearchError> {
//!     let search = YouTubeSearch::new(YouTubeSearchConfig::default())?;
//!     if let SearchOutcome::Success(video) = search_top(&search, "Bohemian Rhapsody").await {
//!         println!("{} -> {}", video.title, music_url(&video.id));
//!     }
//!     Ok(())
//! }
//! ```

mod provider;
mod youtube;

pub use provider::{search_top, SearchError, SearchOutcome, VideoResult, VideoSearch};
pub use youtube::{YouTubeSearch, YouTubeSearchConfig, DEFAULT_BASE_URL};

/// Prefix of every produced link; the video id is appended verbatim.
pub const MUSIC_URL_PREFIX: &str = "https://music.youtube.com/watch?v=";

/// Builds `https://music.youtube.com/watch?v=<video_id>`.
pub fn music_url(video_id: &str) -> String {
    format!("{}{}", MUSIC_URL_PREFIX, video_id)
}
