/*
[INPUT]:  Error sources (HTTP, API, wallet signing, validation)
[OUTPUT]: Structured error types with context and classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the wallet auth client
#[derive(Error, Debug)]
pub enum AuthError {
    /// HTTP transport failed (endpoint unreachable, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {code}): {message}")]
    Api { code: i32, message: String },

    /// The wallet user declined to sign the message
    #[error("signature request rejected by wallet user")]
    UserRejected,

    /// The wallet failed while producing a signature
    #[error("wallet signing failed: {0}")]
    Signing(String),

    /// The server rejected the signed message during verification
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Client-side input validation failed (no request was sent)
    #[error("validation error: {0}")]
    Validation(String),

    /// No wallet is connected, so there is no address to authenticate
    #[error("no wallet connected")]
    WalletUnavailable,

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Check if retrying the same operation could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            AuthError::Network(_) | AuthError::InvalidResponse(_) => true,
            AuthError::Api { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Check if the error came from the wallet rather than the network
    pub fn is_wallet_error(&self) -> bool {
        matches!(self, AuthError::UserRejected | AuthError::Signing(_))
    }

    /// Check if the error indicates the server refused to authenticate
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AuthError::AuthenticationFailed { .. })
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AuthError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for wallet auth operations
pub type Result<T> = std::result::Result<T, AuthError>;
