/*
[INPUT]:  User intents and wallet connectivity events
[OUTPUT]: Authenticated session state kept in sync with the remote API
[POS]:    Session layer - the client-side core
[UPDATE]: When session semantics or the controller surface change
*/

pub mod controller;
pub mod events;
pub mod state;

pub use controller::SessionController;
pub use events::{WalletEvent, spawn_wallet_event_loop};
pub use state::{SessionSnapshot, SessionState};
