//! Wire types for the subset of the YouTube Data API v3 responses the bot reads.

use serde::Deserialize;

/// Response body of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// A single `/search` hit. Depending on the query it may point at a video,
/// a channel or a playlist.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
}

/// Response body of `GET /channels`.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: ChannelSnippet,
    pub statistics: ChannelCounters,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
}

/// Counters are transmitted as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCounters {
    pub video_count: String,
    pub view_count: String,
}

/// Error envelope returned alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
