//! Common test utilities, fixtures, and mocks
//! Shared by the integration tests; not every test file uses every helper.
#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use std::sync::Once;
use std::time::Duration;

use songscout::utils::youtube::YoutubeClient;
use tracing::Level;
use wiremock::MockServer;

static INIT: Once = Once::new();

pub const TEST_API_KEY: &str = "integration-test-key";

/// Initialize tracing for tests
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> YoutubeClient {
    YoutubeClient::new(&server.uri(), TEST_API_KEY, Duration::from_secs(5))
        .expect("mock server uri is a valid base url")
}

/// Number of requests the mock server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .len()
}
