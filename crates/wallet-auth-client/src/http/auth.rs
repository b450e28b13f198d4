/*
[INPUT]:  SIWE messages, signatures, and the session cookie jar
[OUTPUT]: Nonce strings, verification results, session status
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When auth endpoints or their payloads change
*/

use reqwest::Method;

use crate::http::{AuthApiClient, AuthError, Result};
use crate::types::{StatusResponse, VerifyResponse};

impl AuthApiClient {
    /// Request a one-time nonce for the sign-in handshake
    ///
    /// GET /api/auth/nonce - the body is the raw nonce string, not JSON.
    pub async fn fetch_nonce(&self) -> Result<String> {
        let builder = self.request(Method::GET, "/api/auth/nonce")?;
        let body = self.send_text(builder).await?;
        let nonce = body.trim();
        if nonce.is_empty() {
            return Err(AuthError::InvalidResponse(
                "nonce endpoint returned an empty body".to_string(),
            ));
        }
        Ok(nonce.to_string())
    }

    /// Submit a signed message for verification
    ///
    /// POST /api/auth/verify - on success the server sets the session cookie.
    pub async fn verify(&self, message: &str, signature: &str) -> Result<VerifyResponse> {
        let body = serde_json::json!({
            "message": message,
            "signature": signature,
        });

        let builder = self.request(Method::POST, "/api/auth/verify")?;
        self.send_json(builder.json(&body)).await
    }

    /// Ask the server whether the current session cookie is still valid
    ///
    /// GET /api/auth/status
    pub async fn auth_status(&self) -> Result<StatusResponse> {
        let builder = self.request(Method::GET, "/api/auth/status")?;
        self.send_json(builder).await
    }

    /// Invalidate the server-side session
    ///
    /// POST /api/auth/logout
    pub async fn logout(&self) -> Result<()> {
        let builder = self.request(Method::POST, "/api/auth/logout")?;
        self.send_unit(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AuthApiClient, AuthError, ClientConfig};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AuthApiClient {
        AuthApiClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_nonce_returns_trimmed_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/nonce"))
            .respond_with(ResponseTemplate::new(200).set_body_string("abc123\n"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let nonce = client.fetch_nonce().await.unwrap();
        assert_eq!(nonce, "abc123");
    }

    #[tokio::test]
    async fn test_fetch_nonce_maps_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/nonce"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch_nonce().await.unwrap_err();
        match err {
            AuthError::Api { code, message } => {
                assert_eq!(code, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_nonce_rejects_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/nonce"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch_nonce().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_status_with_malformed_body_maps_to_serialization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.auth_status().await.unwrap_err();
        assert!(matches!(err, AuthError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_verify_posts_message_and_signature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/verify"))
            .and(body_json(serde_json::json!({
                "message": "msg",
                "signature": "0xsig",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.verify("msg", "0xsig").await.unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_auth_status_decodes_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authenticated": false,
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let status = client.auth_status().await.unwrap();
        assert!(!status.authenticated);
    }
}
