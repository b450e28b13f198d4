/*
[INPUT]:  Wallet connectivity changes from the hosting application
[OUTPUT]: Session resets and status checks, processed in arrival order
[POS]:    Session layer - explicit wallet event subscription
[UPDATE]: When event kinds or dispatch behavior change
*/

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::auth::WalletSigner;
use crate::session::SessionController;

/// A wallet connectivity change.
///
/// Connect and address-change both carry the signer for the now-current
/// address; either way the previous session no longer applies.
pub enum WalletEvent {
    Connected(Arc<dyn WalletSigner>),
    AddressChanged(Arc<dyn WalletSigner>),
    Disconnected,
}

/// Process wallet events on a background task, one at a time.
///
/// Each event fully settles (including the follow-up status check) before the
/// next is taken, so state transitions happen in arrival order. The task ends
/// when the sender side is dropped.
pub fn spawn_wallet_event_loop(
    controller: Arc<SessionController>,
    mut events: UnboundedReceiver<WalletEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            controller.handle_wallet_event(event).await;
        }
        tracing::debug!("wallet event stream closed");
    })
}
