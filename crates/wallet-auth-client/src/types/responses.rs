/*
[INPUT]:  API response bodies
[OUTPUT]: Typed Rust structs with deserialization support
[POS]:    Data layer - response envelopes
[UPDATE]: When response formats change
*/

use serde::Deserialize;

/// Response from POST /api/auth/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from GET /api/auth/status
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
}
