/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for the SIWE handshake
[POS]:    Integration tests - authentication flow
[UPDATE]: When auth endpoints or handshake steps change
*/

mod common;

use std::sync::Arc;

use common::{
    TEST_ADDRESS, TEST_SIGNATURE, build_controller, connected_controller, mount_nonce,
    mount_user_data, mount_verify, setup_mock_server,
};
use wallet_auth_client::{
    AuthApiClient, AuthError, ClientConfig, MockWalletSigner, SessionController, SessionState,
    SiweConfig,
};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_end_to_end_signin_embeds_nonce_and_fetches_user_data_once() {
    let server = setup_mock_server().await;
    mount_nonce(&server, "abc123", 1).await;
    mount_verify(&server, true).await;
    mount_user_data(&server, Some("Alice"), 1).await;

    let controller = connected_controller(&server);
    assert_ok!(controller.authenticate().await);

    assert!(controller.state().is_authenticated());
    assert!(!controller.state().is_loading());
    assert!(controller.state().error().is_none());

    let data = controller.state().user_data().expect("user data fetched");
    assert_eq!(data.user.wallet_address, TEST_ADDRESS);
    assert_eq!(data.profile.unwrap().name.as_deref(), Some("Alice"));

    // The signed message must carry the server nonce verbatim, and the
    // server must have received exactly the signature the wallet produced.
    let requests = server.received_requests().await.unwrap();
    let verify = requests
        .iter()
        .find(|r| r.url.path() == "/api/auth/verify")
        .expect("verify request sent");
    let body: serde_json::Value = serde_json::from_slice(&verify.body).unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Nonce: abc123"));
    assert!(message.contains(TEST_ADDRESS));
    assert_eq!(body["signature"].as_str(), Some(TEST_SIGNATURE));
}

#[tokio::test]
async fn test_verify_success_false_leaves_session_unauthenticated() {
    let server = setup_mock_server().await;
    mount_nonce(&server, "abc123", 1).await;
    mount_verify(&server, false).await;
    // No user data fetch when authentication fails.
    mount_user_data(&server, None, 0).await;

    let controller = connected_controller(&server);
    let err = controller.authenticate().await.unwrap_err();

    assert!(matches!(err, AuthError::AuthenticationFailed { .. }));
    assert!(!controller.state().is_authenticated());
    assert!(controller.state().error().is_some());
}

#[tokio::test]
async fn test_authenticate_without_wallet_fails_before_any_request() {
    let server = setup_mock_server().await;
    mount_nonce(&server, "abc123", 0).await;

    let controller = build_controller(&server);
    let err = controller.authenticate().await.unwrap_err();

    assert!(matches!(err, AuthError::WalletUnavailable));
    assert!(!controller.state().is_authenticated());
}

#[tokio::test]
async fn test_retry_after_failure_runs_full_handshake_with_fresh_nonce() {
    let server = setup_mock_server().await;
    mount_nonce(&server, "nonce-xyz", 2).await;
    mount_user_data(&server, None, 1).await;

    // First verification attempt fails as if the nonce went stale.
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error": "stale nonce",
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
        })))
        .mount(&server)
        .await;

    let controller = connected_controller(&server);

    let err = controller.authenticate().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(!controller.state().is_authenticated());

    assert_ok!(controller.authenticate().await);
    assert!(controller.state().is_authenticated());
    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_unreachable_server_surfaces_network_error() {
    // Nothing listens here; the nonce request fails at the transport layer.
    let client =
        AuthApiClient::with_config(ClientConfig::with_base_url("http://127.0.0.1:9")).unwrap();
    let controller = SessionController::new(
        client,
        SessionState::new(),
        SiweConfig::new("app.example.com", "https://app.example.com"),
    );
    controller.set_wallet(Some(Arc::new(MockWalletSigner::new(
        TEST_ADDRESS,
        1,
        TEST_SIGNATURE,
    ))));

    let err = controller.authenticate().await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_)));
    assert!(!controller.state().is_authenticated());
    assert!(controller.state().error().is_some());
}

#[tokio::test]
async fn test_signing_error_is_distinguished_from_rejection() {
    let server = setup_mock_server().await;
    mount_nonce(&server, "abc123", 1).await;

    let controller = build_controller(&server);
    controller.set_wallet(Some(Arc::new(MockWalletSigner::failing(
        TEST_ADDRESS,
        1,
        "hardware fault",
    ))));

    let err = controller.authenticate().await.unwrap_err();
    match err {
        AuthError::Signing(reason) => assert_eq!(reason, "hardware fault"),
        other => panic!("unexpected error: {other:?}"),
    }
}
