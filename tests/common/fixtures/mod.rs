//! Sample YouTube Data API payloads.

use serde_json::{Value, json};

pub fn empty_list() -> Value {
    json!({ "kind": "youtube#searchListResponse", "items": [] })
}

pub fn video_search(title: &str, video_id: &str) -> Value {
    json!({
        "kind": "youtube#searchListResponse",
        "pageInfo": { "totalResults": 1000000, "resultsPerPage": 1 },
        "items": [{
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#video", "videoId": video_id },
            "snippet": {
                "title": title,
                "channelTitle": "Some Channel",
                "description": ""
            }
        }]
    })
}

pub fn channel_search(title: &str, channel_id: &str) -> Value {
    json!({
        "kind": "youtube#searchListResponse",
        "items": [{
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#channel", "channelId": channel_id },
            "snippet": { "title": title, "channelId": channel_id }
        }]
    })
}

pub fn channel_statistics(channel_id: &str, title: &str, video_count: &str, view_count: &str) -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "items": [{
            "kind": "youtube#channel",
            "id": channel_id,
            "snippet": { "title": title, "description": "" },
            "statistics": {
                "viewCount": view_count,
                "subscriberCount": "12345",
                "hiddenSubscriberCount": false,
                "videoCount": video_count
            }
        }]
    })
}

pub fn api_error(code: u16, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "errors": [{ "message": message, "domain": "youtube.quota", "reason": "quotaExceeded" }]
        }
    })
}
