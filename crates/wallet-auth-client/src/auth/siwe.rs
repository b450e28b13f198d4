/*
[INPUT]:  Relying-party identity, wallet address, and a server nonce
[OUTPUT]: EIP-4361 sign-in message text ready for wallet signing
[POS]:    Auth layer - SIWE message construction (verification stays server-side)
[UPDATE]: When message fields or the relying-party identity change
*/

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Relying-party identity embedded in every sign-in message
#[derive(Debug, Clone)]
pub struct SiweConfig {
    /// RFC 3986 authority requesting the signing, e.g. "app.example.com"
    pub domain: String,
    /// URI the message applies to, e.g. "https://app.example.com"
    pub uri: String,
    /// Optional human-readable statement shown by the wallet
    pub statement: Option<String>,
}

impl SiweConfig {
    pub fn new(domain: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            uri: uri.into(),
            statement: None,
        }
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }
}

/// A Sign-In with Ethereum (EIP-4361) message.
///
/// Construction only: the signed text is verified by the remote API, never
/// locally. The nonce is embedded verbatim as issued by the server.
#[derive(Debug, Clone)]
pub struct SiweMessage {
    pub domain: String,
    pub address: String,
    pub statement: Option<String>,
    pub uri: String,
    pub version: &'static str,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
}

impl SiweMessage {
    /// Build a message for the given wallet address and server-issued nonce
    pub fn new(config: &SiweConfig, address: &str, chain_id: u64, nonce: &str) -> Self {
        Self {
            domain: config.domain.clone(),
            address: address.to_string(),
            statement: config.statement.clone(),
            uri: config.uri.clone(),
            version: "1",
            chain_id,
            nonce: nonce.to_string(),
            issued_at: Utc::now(),
        }
    }

    /// Pin the issuance timestamp (deterministic message text in tests)
    pub fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = issued_at;
        self
    }
}

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} wants you to sign in with your Ethereum account:",
            self.domain
        )?;
        writeln!(f, "{}", self.address)?;
        writeln!(f)?;
        if let Some(statement) = &self.statement {
            writeln!(f, "{statement}")?;
        }
        writeln!(f)?;
        writeln!(f, "URI: {}", self.uri)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Chain ID: {}", self.chain_id)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        write!(
            f,
            "Issued At: {}",
            self.issued_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}
