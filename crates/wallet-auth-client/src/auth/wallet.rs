/*
[INPUT]:  Message to sign and a wallet holding key material
[OUTPUT]: Signature string for authentication
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use async_trait::async_trait;

use crate::http::{AuthError, Result};

/// Trait for wallet signing operations.
///
/// The wallet is a capability: given a message string it returns a signature
/// string or fails. The trait is async to support hardware wallets and
/// external signers. A refused signature surfaces as
/// [`AuthError::UserRejected`]; any other signing problem as
/// [`AuthError::Signing`].
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// The wallet address, 0x-prefixed
    fn address(&self) -> &str;

    /// EIP-155 chain id the wallet is connected to
    fn chain_id(&self) -> u64;

    /// Sign a message and return the hex-encoded signature
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// How a [`MockWalletSigner`] responds to signature requests
#[derive(Debug, Clone)]
enum MockSigning {
    Sign(String),
    Reject,
    Fail(String),
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    chain_id: u64,
    signing: MockSigning,
}

impl MockWalletSigner {
    /// Create a mock signer returning a predetermined signature
    pub fn new(address: &str, chain_id: u64, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            chain_id,
            signing: MockSigning::Sign(signature.to_string()),
        }
    }

    /// Create a mock signer whose user rejects every request
    pub fn rejecting(address: &str, chain_id: u64) -> Self {
        Self {
            address: address.to_string(),
            chain_id,
            signing: MockSigning::Reject,
        }
    }

    /// Create a mock signer that errors on every request
    pub fn failing(address: &str, chain_id: u64, reason: &str) -> Self {
        Self {
            address: address.to_string(),
            chain_id,
            signing: MockSigning::Fail(reason.to_string()),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        match &self.signing {
            MockSigning::Sign(signature) => Ok(signature.clone()),
            MockSigning::Reject => Err(AuthError::UserRejected),
            MockSigning::Fail(reason) => Err(AuthError::Signing(reason.clone())),
        }
    }
}
