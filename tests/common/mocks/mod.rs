//! wiremock helpers that stand in for the YouTube Data API endpoints.
//! Each helper takes the number of calls the test expects; the mock server
//! verifies it when dropped.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::TEST_API_KEY;

pub async fn song_search(server: &MockServer, artist: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", artist))
        .and(query_param("type", "video"))
        .and(query_param("videoCategoryId", "10"))
        .and(query_param("maxResults", "1"))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(response)
        .expect(calls)
        .named("song search")
        .mount(server)
        .await;
}

pub async fn channel_resolve(server: &MockServer, name: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", name))
        .and(query_param("type", "channel"))
        .and(query_param("maxResults", "1"))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(response)
        .expect(calls)
        .named("channel resolve")
        .mount(server)
        .await;
}

pub async fn channel_statistics(
    server: &MockServer,
    channel_id: &str,
    response: ResponseTemplate,
    calls: u64,
) {
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "statistics,snippet"))
        .and(query_param("id", channel_id))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(response)
        .expect(calls)
        .named("channel statistics")
        .mount(server)
        .await;
}

pub async fn most_popular(server: &MockServer, channel_id: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("channelId", channel_id))
        .and(query_param("order", "viewCount"))
        .and(query_param("maxResults", "1"))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(response)
        .expect(calls)
        .named("most popular video")
        .mount(server)
        .await;
}

pub fn ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn status(code: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(body)
}
