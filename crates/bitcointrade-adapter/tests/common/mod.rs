/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitcointrade-adapter tests

use std::net::TcpListener;

use bitcointrade_adapter::{BitcoinTradeClient, ClientConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the given mock server
pub fn test_client(base_url: &str) -> BitcoinTradeClient {
    BitcoinTradeClient::with_config_and_base_url(TEST_API_KEY, ClientConfig::default(), base_url)
        .expect("client init")
}

/// A loopback URL with nothing listening on it, so connections are refused
#[allow(dead_code)]
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
