/*
[INPUT]:  EVM private key (hex string) and chain id
[OUTPUT]: EIP-191 signed messages and a checksummed wallet address
[POS]:    Auth layer - local EVM wallet implementation
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletSigner;
use crate::http::{AuthError, Result};

/// Wallet signer backed by a local private key.
///
/// Browser-extension and hardware wallets live behind their own
/// [`WalletSigner`] implementations; this one covers bots, tests, and CLI use.
#[derive(Debug)]
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
    chain_id: u64,
}

impl EvmWalletSigner {
    /// Create a signer from a hex-encoded private key.
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str, chain_id: u64) -> Result<Self> {
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| AuthError::Config(format!("invalid EVM private key: {e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self {
            signer,
            address,
            chain_id,
        })
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| AuthError::Signing(format!("failed to sign EVM message: {e}")))?;

        // alloy's Signature as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
