/*
[INPUT]:  Wallet signer, HTTP client, and user intents (sign in, edit, logout)
[OUTPUT]: Sequenced SIWE handshake and synchronized session/profile state
[POS]:    Session layer - orchestrates the authentication flow
[UPDATE]: When handshake steps or state synchronization rules change
*/

use std::sync::{Arc, RwLock};

use crate::auth::{SiweConfig, SiweMessage, WalletSigner};
use crate::http::{AuthApiClient, AuthError, Result};
use crate::session::{SessionState, WalletEvent};
use crate::types::ProfileUpdate;

/// Orchestrates the SIWE handshake and profile calls against the remote API.
///
/// Operations inside a method run strictly sequentially; the controller does
/// not serialize overlapping invocations from different tasks (last write
/// wins) and never cancels an in-flight request. Read-path operations
/// (`check_auth_status`, `fetch_user_data`) swallow failures into a safe
/// default state; write-path operations return their errors to the caller.
pub struct SessionController {
    client: AuthApiClient,
    state: SessionState,
    siwe: SiweConfig,
    wallet: RwLock<Option<Arc<dyn WalletSigner>>>,
}

impl SessionController {
    /// Create a controller over an injected state store.
    ///
    /// The state handle is shared: callers keep a clone to observe what the
    /// controller writes, or substitute a fresh one per test.
    pub fn new(client: AuthApiClient, state: SessionState, siwe: SiweConfig) -> Self {
        Self {
            client,
            state,
            siwe,
            wallet: RwLock::new(None),
        }
    }

    /// Handle to the shared session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Install or clear the connected wallet without going through an event
    pub fn set_wallet(&self, wallet: Option<Arc<dyn WalletSigner>>) {
        *self.wallet.write().unwrap() = wallet;
    }

    /// Address of the currently connected wallet, if any
    pub fn wallet_address(&self) -> Option<String> {
        self.wallet
            .read()
            .unwrap()
            .as_ref()
            .map(|w| w.address().to_string())
    }

    fn current_wallet(&self) -> Option<Arc<dyn WalletSigner>> {
        self.wallet.read().unwrap().clone()
    }

    /// React to a wallet connectivity change.
    ///
    /// Any connect, address change, or disconnect drops the session back to
    /// unauthenticated; connects then ask the server whether the cookie is
    /// still good for the new context.
    pub async fn handle_wallet_event(&self, event: WalletEvent) {
        match event {
            WalletEvent::Connected(wallet) | WalletEvent::AddressChanged(wallet) => {
                tracing::debug!(address = wallet.address(), "wallet connected");
                self.state.reset();
                self.set_wallet(Some(wallet));
                self.check_auth_status().await;
            }
            WalletEvent::Disconnected => {
                tracing::debug!("wallet disconnected");
                self.set_wallet(None);
                self.state.reset();
            }
        }
    }

    /// Run the full sign-in handshake.
    ///
    /// 1. Fetch a one-time nonce
    /// 2. Build the SIWE message for the connected address
    /// 3. Ask the wallet to sign it
    /// 4. Submit `{message, signature}` for verification
    ///
    /// On success the session is marked authenticated and user data is
    /// fetched best-effort: a failed fetch leaves `user_data` empty without
    /// reverting authentication. On any failure the session stays
    /// unauthenticated with the error recorded for display. Retrying after a
    /// failure repeats the whole handshake with a fresh nonce.
    pub async fn authenticate(&self) -> Result<()> {
        // Precondition: checked before any network call.
        let Some(wallet) = self.current_wallet() else {
            let err = AuthError::WalletUnavailable;
            self.state.set_error(Some(err.to_string()));
            return Err(err);
        };

        self.state.set_loading(true);
        self.state.set_error(None);

        match self.run_handshake(wallet.as_ref()).await {
            Ok(()) => {
                self.state.set_authenticated(true);
                self.state.set_loading(false);
                self.fetch_user_data().await;
                Ok(())
            }
            Err(err) => {
                self.state.set_authenticated(false);
                self.state.set_error(Some(err.to_string()));
                self.state.set_loading(false);
                Err(err)
            }
        }
    }

    async fn run_handshake(&self, wallet: &dyn WalletSigner) -> Result<()> {
        // Step 1: one-time nonce
        let nonce = self.client.fetch_nonce().await?;
        tracing::debug!(address = wallet.address(), "nonce received");

        // Step 2: SIWE message embedding address, chain id, and nonce
        let message =
            SiweMessage::new(&self.siwe, wallet.address(), wallet.chain_id(), &nonce).to_string();

        // Step 3: wallet signature
        let signature = wallet.sign_message(&message).await?;

        // Step 4: server verification; the session cookie arrives here
        let verification = self.client.verify(&message, &signature).await?;
        if !verification.success {
            return Err(AuthError::AuthenticationFailed {
                message: verification
                    .error
                    .unwrap_or_else(|| "server rejected signature".to_string()),
            });
        }

        Ok(())
    }

    /// Invalidate the server session and clear local state.
    ///
    /// The network call is fire and forget: the user's intent is to stop
    /// being treated as authenticated, so local state clears even when the
    /// server call fails.
    pub async fn logout(&self) {
        if let Err(err) = self.client.logout().await {
            tracing::warn!(error = %err, "logout request failed; clearing local session anyway");
        }
        self.state.set_authenticated(false);
        self.state.set_user_data(None);
        self.state.set_error(None);
    }

    /// Ask the server whether the session cookie is still valid.
    ///
    /// Fail-closed: any failure is treated as unauthenticated.
    pub async fn check_auth_status(&self) {
        match self.client.auth_status().await {
            Ok(status) => {
                self.state.set_authenticated(status.authenticated);
                if status.authenticated {
                    self.fetch_user_data().await;
                } else {
                    self.state.set_user_data(None);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "auth status check failed; treating as signed out");
                self.state.set_authenticated(false);
                self.state.set_user_data(None);
            }
        }
    }

    /// Refresh the user/profile composite.
    ///
    /// Never propagates: this runs as a passive refresh after other
    /// mutations, so failures degrade to empty data plus a log line. No
    /// caching; every call issues a request.
    pub async fn fetch_user_data(&self) {
        match self.client.fetch_user_data().await {
            Ok(data) => self.state.set_user_data(Some(data)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch user data");
                self.state.set_user_data(None);
            }
        }
    }

    /// Create or partially update the profile.
    ///
    /// Validation failures and server errors propagate so the initiating
    /// view can keep its edit form open; success refreshes user data.
    pub async fn create_or_update_profile(&self, update: ProfileUpdate) -> Result<()> {
        update.validate()?;
        if let Err(err) = self.client.upsert_profile(&update).await {
            self.state.set_error(Some(err.to_string()));
            return Err(err);
        }
        self.fetch_user_data().await;
        Ok(())
    }

    /// Delete the profile; the refreshed user data comes back with
    /// `profile: None`.
    pub async fn delete_profile(&self) -> Result<()> {
        if let Err(err) = self.client.delete_profile().await {
            self.state.set_error(Some(err.to_string()));
            return Err(err);
        }
        self.fetch_user_data().await;
        Ok(())
    }
}
