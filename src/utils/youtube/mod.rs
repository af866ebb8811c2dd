//! Client for the YouTube Data API v3.
//!
//! Every public lookup returns a [`Lookup`]: either the value was found, or it
//! was not. Empty result sets, transport failures, non-success statuses and
//! malformed payloads all end up as [`Lookup::NotFound`]. The underlying
//! [`YoutubeError`] is only ever written to the log.

/// Orchestration of the multi-step channel lookup.
pub(crate) mod channel_info;
/// Serde wire types for API responses.
pub(crate) mod models;

pub use channel_info::get_channel_info;

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serenity::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::YoutubeConfig;
use models::{ApiErrorResponse, ChannelListResponse, SearchListResponse};

/// Prefix of a playable video link; the video id is appended.
pub const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// YouTube's category id for "Music".
const MUSIC_CATEGORY_ID: &str = "10";

/// Errors that can occur while talking to the YouTube Data API.
#[derive(Error, Debug)]
pub enum YoutubeError {
    /// Error during HTTP request communication (including timeouts).
    #[error("API communication failure: {0}")]
    Api(reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The response body was not the JSON we expected.
    #[error("Unable to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed but a required value was missing or unusable.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for YoutubeError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key.
        YoutubeError::Api(e.without_url())
    }
}

/// Outcome of a lookup against the platform.
///
/// Deliberately has no error variant: "nothing matched" and "the request
/// failed" are the same answer for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// A playable video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub video_id: String,
    pub url: String,
}

impl VideoResult {
    pub fn new(title: impl Into<String>, video_id: impl Into<String>) -> Self {
        let video_id = video_id.into();
        Self {
            title: title.into(),
            url: format!("{WATCH_URL}{video_id}"),
            video_id,
        }
    }
}

/// Opaque channel identifier as issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregate counters of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStatistics {
    pub title: String,
    pub video_count: u64,
    pub view_count: u64,
}

/// Channel statistics merged with the channel's most viewed video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub title: String,
    pub video_count: u64,
    pub view_count: u64,
    /// `None` for channels without public videos.
    pub most_popular_video: Option<VideoResult>,
}

impl ChannelInfo {
    pub fn merge(statistics: ChannelStatistics, most_popular_video: Option<VideoResult>) -> Self {
        Self {
            title: statistics.title,
            video_count: statistics.video_count,
            view_count: statistics.view_count,
            most_popular_video,
        }
    }
}

/// The four read operations the bot needs from the video platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Best matching music video for an artist.
    async fn search_video_by_artist(&self, artist: &str) -> Lookup<VideoResult>;

    /// Resolves a human readable channel name to its identifier.
    async fn resolve_channel(&self, channel_name: &str) -> Lookup<ChannelId>;

    /// Title and counters of a channel.
    async fn fetch_statistics(&self, id: &ChannelId) -> Lookup<ChannelStatistics>;

    /// The channel's video with the highest view count.
    async fn fetch_most_popular(&self, id: &ChannelId) -> Lookup<VideoResult>;
}

/// HTTP client for the YouTube Data API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl YoutubeClient {
    /// Creates a client rooted at `base_url` (e.g. `https://www.googleapis.com/youtube/v3`).
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, YoutubeError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &YoutubeConfig) -> Result<Self, YoutubeError> {
        Self::new(&config.base_url, config.api_key.clone(), config.request_timeout)
    }

    /// Sends a GET to `endpoint` with `query` plus the API key and decodes the body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, YoutubeError> {
        let url = self.base_url.join(endpoint)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| "no error details".to_string());
            return Err(YoutubeError::Status { status, message });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn try_search_video_by_artist(
        &self,
        artist: &str,
    ) -> Result<Option<VideoResult>, YoutubeError> {
        let response: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", artist),
                    ("type", "video"),
                    ("videoCategoryId", MUSIC_CATEGORY_ID),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        first_video(response)
    }

    async fn try_resolve_channel(
        &self,
        channel_name: &str,
    ) -> Result<Option<ChannelId>, YoutubeError> {
        let response: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", channel_name),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        let Some(item) = response.items.into_iter().next() else {
            return Ok(None);
        };

        item.id
            .channel_id
            .map(ChannelId::new)
            .map(Some)
            .ok_or_else(|| YoutubeError::Malformed("search hit has no channelId".to_string()))
    }

    async fn try_fetch_statistics(
        &self,
        id: &ChannelId,
    ) -> Result<Option<ChannelStatistics>, YoutubeError> {
        let response: ChannelListResponse = self
            .get(
                "channels",
                &[("part", "statistics,snippet"), ("id", id.as_str())],
            )
            .await?;

        let Some(channel) = response.items.into_iter().next() else {
            return Ok(None);
        };

        Ok(Some(ChannelStatistics {
            title: channel.snippet.title,
            video_count: parse_counter("videoCount", &channel.statistics.video_count)?,
            view_count: parse_counter("viewCount", &channel.statistics.view_count)?,
        }))
    }

    async fn try_fetch_most_popular(
        &self,
        id: &ChannelId,
    ) -> Result<Option<VideoResult>, YoutubeError> {
        let response: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", id.as_str()),
                    ("order", "viewCount"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        first_video(response)
    }
}

#[async_trait]
impl VideoPlatform for YoutubeClient {
    async fn search_video_by_artist(&self, artist: &str) -> Lookup<VideoResult> {
        info!("Searching music video for artist: {}", artist);
        collapse(
            "video search",
            artist,
            self.try_search_video_by_artist(artist).await,
        )
    }

    async fn resolve_channel(&self, channel_name: &str) -> Lookup<ChannelId> {
        info!("Resolving channel: {}", channel_name);
        collapse(
            "channel resolution",
            channel_name,
            self.try_resolve_channel(channel_name).await,
        )
    }

    async fn fetch_statistics(&self, id: &ChannelId) -> Lookup<ChannelStatistics> {
        debug!("Fetching statistics for channel {}", id);
        collapse(
            "channel statistics",
            id.as_str(),
            self.try_fetch_statistics(id).await,
        )
    }

    async fn fetch_most_popular(&self, id: &ChannelId) -> Lookup<VideoResult> {
        debug!("Fetching most popular video for channel {}", id);
        collapse(
            "most popular video",
            id.as_str(),
            self.try_fetch_most_popular(id).await,
        )
    }
}

/// Turns an internal result into a [`Lookup`], logging anything that is not a hit.
fn collapse<T>(
    operation: &str,
    subject: &str,
    outcome: Result<Option<T>, YoutubeError>,
) -> Lookup<T> {
    match outcome {
        Ok(found) => {
            if found.is_none() {
                info!("{} returned no results for '{}'", operation, subject);
            }
            Lookup::from(found)
        }
        Err(e) => {
            warn!("{} failed for '{}': {}", operation, subject, e);
            Lookup::NotFound
        }
    }
}

/// Maps the first search hit to a video. A hit that is not a video is malformed.
fn first_video(response: SearchListResponse) -> Result<Option<VideoResult>, YoutubeError> {
    let Some(item) = response.items.into_iter().next() else {
        return Ok(None);
    };

    let video_id = item.id.video_id.ok_or_else(|| {
        YoutubeError::Malformed(format!(
            "search hit '{}' is not a video ({})",
            item.snippet.title,
            item.id.kind.as_deref().unwrap_or("unknown kind")
        ))
    })?;

    Ok(Some(VideoResult::new(item.snippet.title, video_id)))
}

fn parse_counter(name: &str, raw: &str) -> Result<u64, YoutubeError> {
    raw.parse()
        .map_err(|_| YoutubeError::Malformed(format!("{name} is not a count: '{raw}'")))
}
