/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for car-api-adapter tests

use car_api_adapter::{CarApiClient, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with default configuration
pub fn client_for(server: &MockServer) -> CarApiClient {
    CarApiClient::new(&server.uri()).expect("client init")
}

/// Client pointed at the mock server with a custom configuration
#[allow(dead_code)]
pub fn client_with_config(server: &MockServer, config: ClientConfig) -> CarApiClient {
    CarApiClient::with_config(config, &server.uri()).expect("client init")
}

/// Success envelope the backend wraps acknowledgements in
pub fn ok_ack(msg: &str) -> serde_json::Value {
    serde_json::json!({ "code": 200, "msg": msg })
}

/// Mock login token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "eyJhbGciOiJIUzUxMiJ9.test.signature".to_string()
}
