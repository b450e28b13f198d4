/*
[INPUT]:  Wallet private key and API base URL
[OUTPUT]: Authenticated session against the EVM Wallet Auth API
[POS]:    Examples - sign-in flow demonstration
[UPDATE]: When the handshake or controller surface changes
*/

use std::sync::Arc;

use wallet_auth_client::{
    AuthApiClient, ClientConfig, EvmWalletSigner, SessionController, SessionState, SiweConfig,
    WalletSigner,
};

/// Example: SIWE sign-in flow
///
/// 1. Create the HTTP client (cookie jar included)
/// 2. Create the session controller with an injectable state store
/// 3. Connect a wallet signer
/// 4. Run the handshake: nonce -> message -> signature -> verify
#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("WALLET_AUTH_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let client = match AuthApiClient::with_config(ClientConfig::with_base_url(&base_url)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            return;
        }
    };
    println!("✓ HTTP client created for {base_url}");

    let state = SessionState::new();
    let controller = SessionController::new(
        client,
        state.clone(),
        SiweConfig::new("localhost:3000", "http://localhost:3000")
            .with_statement("Sign in to manage your profile."),
    );
    println!("✓ Session controller created");

    // Well-known hardhat/anvil test key; never use it with real funds.
    let pk = std::env::var("WALLET_PRIVATE_KEY")
        .unwrap_or_else(|_| "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string());
    let wallet = match EvmWalletSigner::new(&pk, 1) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load wallet: {e}");
            return;
        }
    };
    println!("✓ Wallet loaded: {}", wallet.address());
    controller.set_wallet(Some(Arc::new(wallet)));

    match controller.authenticate().await {
        Ok(()) => {
            println!("✓ Authenticated");
            if let Some(data) = state.user_data() {
                println!("  user id: {}", data.user.id);
                match data.profile {
                    Some(profile) => println!("  profile name: {:?}", profile.name),
                    None => println!("  no profile yet"),
                }
            }
        }
        Err(e) => eprintln!("✗ Authentication failed: {e}"),
    }

    controller.logout().await;
    println!("✓ Signed out");
}
