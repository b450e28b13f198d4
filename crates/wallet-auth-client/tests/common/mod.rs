/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallet-auth-client tests

#![allow(dead_code)]

use std::sync::Arc;

use wallet_auth_client::{
    AuthApiClient, ClientConfig, MockWalletSigner, SessionController, SessionState, SiweConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TEST_SIGNATURE: &str = "0xdeadbeefdeadbeefdeadbeefdeadbeef";
pub const TEST_CHAIN_ID: u64 = 1;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Controller wired to the mock server, no wallet connected
pub fn build_controller(server: &MockServer) -> SessionController {
    let client = AuthApiClient::with_config(ClientConfig::with_base_url(server.uri()))
        .expect("client init");
    SessionController::new(
        client,
        SessionState::new(),
        SiweConfig::new("app.example.com", "https://app.example.com"),
    )
}

/// Controller with a deterministic mock wallet already connected
pub fn connected_controller(server: &MockServer) -> SessionController {
    let controller = build_controller(server);
    controller.set_wallet(Some(Arc::new(MockWalletSigner::new(
        TEST_ADDRESS,
        TEST_CHAIN_ID,
        TEST_SIGNATURE,
    ))));
    controller
}

/// JSON body for GET /api/a/profile
pub fn user_data_body(profile_name: Option<&str>) -> serde_json::Value {
    let profile = match profile_name {
        Some(name) => serde_json::json!({
            "name": name,
            "email": "alice@example.com",
            "avatar": null,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-02T00:00:00Z",
        }),
        None => serde_json::Value::Null,
    };
    serde_json::json!({
        "user": {
            "id": "u-1",
            "walletAddress": TEST_ADDRESS,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-02T00:00:00Z",
        },
        "profile": profile,
    })
}

/// Mount the nonce endpoint returning a fixed nonce
pub async fn mount_nonce(server: &MockServer, nonce: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/auth/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_string(nonce))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mount the verify endpoint with the given outcome
pub async fn mount_verify(server: &MockServer, success: bool) {
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": success,
        })))
        .mount(server)
        .await;
}

/// Mount the profile fetch endpoint
pub async fn mount_user_data(server: &MockServer, profile_name: Option<&str>, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/a/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_data_body(profile_name)))
        .expect(expected_calls)
        .mount(server)
        .await;
}
