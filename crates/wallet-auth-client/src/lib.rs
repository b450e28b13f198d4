/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public wallet auth client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod session;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    EvmWalletSigner,
    MockWalletSigner,
    SiweConfig,
    SiweMessage,
    WalletSigner,
};

// Re-export commonly used types from http
pub use http::{
    AuthApiClient,
    AuthError,
    ClientConfig,
    Result,
};

// Re-export the session core
pub use session::{
    SessionController,
    SessionSnapshot,
    SessionState,
    WalletEvent,
    spawn_wallet_event_loop,
};

// Re-export all types
pub use types::*;
