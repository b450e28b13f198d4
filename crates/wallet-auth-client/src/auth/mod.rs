/*
[INPUT]:  Wallet key material and relying-party identity
[OUTPUT]: Sign-in messages and wallet signatures
[POS]:    Auth layer - wallet abstraction and SIWE message construction
[UPDATE]: When wallet integrations or the message format change
*/

pub mod evm_wallet;
pub mod siwe;
pub mod wallet;

pub use evm_wallet::EvmWalletSigner;
pub use siwe::{SiweConfig, SiweMessage};
pub use wallet::{MockWalletSigner, WalletSigner};
