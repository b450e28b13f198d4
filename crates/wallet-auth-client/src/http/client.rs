/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client with a cookie jar, ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response handling
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{AuthError, Result};

/// Default base URL for the EVM Wallet Auth API
const DEFAULT_BASE_URL: &str = "https://auth.example.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a deployment-specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the EVM Wallet Auth API.
///
/// Carries a cookie jar: the server issues the session as an HTTP cookie on
/// successful verification, and every subsequent request is credentialed by
/// replaying it. No bearer tokens are involved.
#[derive(Debug, Clone)]
pub struct AuthApiClient {
    http_client: Client,
    base_url: Url,
}

impl AuthApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request builder for an API endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON response body.
    ///
    /// Non-success statuses map to `Api`; a success status with a body that
    /// does not parse maps to `Serialization`, not `Network`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::api_error(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request and return the raw text body (nonce endpoint)
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::api_error(status, body));
        }
        Ok(response.text().await?)
    }

    /// Send a request where only the status matters
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::api_error(status, body));
        }
        Ok(())
    }
}
