//! Shared test utilities for integration tests.

#![allow(dead_code)]

use cz_api::ApiClient;
use cz_core::config::ClientConfig;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Client pointed at the mock server with a valid token.
pub fn authed_client(server: &MockServer) -> ApiClient {
    client_with_token(server, TOKEN)
}

/// Client pointed at the mock server in public-only mode.
pub fn public_client(server: &MockServer) -> ApiClient {
    client_with_token(server, "")
}

pub fn client_with_token(server: &MockServer, token: &str) -> ApiClient {
    let config = ClientConfig {
        base_url: server.uri(),
        api_token: token.to_string(),
        timeout_ms: 5_000,
    };
    ApiClient::from_config(&config).expect("failed to build test client")
}

/// Mount a catch-all mock that must never be hit. The server verifies the
/// expectation when it is dropped at the end of the test.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Number of requests the server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or(0)
}
