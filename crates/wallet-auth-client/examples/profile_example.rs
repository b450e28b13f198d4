/*
[INPUT]:  An authenticated session
[OUTPUT]: Profile create/update/delete round trip
[POS]:    Examples - profile management demonstration
[UPDATE]: When profile operations change
*/

use std::sync::Arc;

use wallet_auth_client::{
    AuthApiClient, ClientConfig, EvmWalletSigner, ProfileUpdate, SessionController, SessionState,
    SiweConfig,
};

#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("WALLET_AUTH_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let client = AuthApiClient::with_config(ClientConfig::with_base_url(&base_url))
        .expect("client init");
    let state = SessionState::new();
    let controller = SessionController::new(
        client,
        state.clone(),
        SiweConfig::new("localhost:3000", "http://localhost:3000"),
    );

    let pk = std::env::var("WALLET_PRIVATE_KEY")
        .unwrap_or_else(|_| "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string());
    let wallet = EvmWalletSigner::new(&pk, 1).expect("wallet init");
    controller.set_wallet(Some(Arc::new(wallet)));

    if let Err(e) = controller.authenticate().await {
        eprintln!("✗ Authentication failed: {e}");
        return;
    }
    println!("✓ Authenticated");

    let update = ProfileUpdate::new()
        .name("Alice")
        .email("alice@example.com")
        .avatar("https://cdn.example.com/alice.png");

    match controller.create_or_update_profile(update).await {
        Ok(()) => {
            println!("✓ Profile saved");
            if let Some(profile) = state.user_data().and_then(|d| d.profile) {
                println!("  name:  {:?}", profile.name);
                println!("  email: {:?}", profile.email);
            }
        }
        Err(e) => {
            eprintln!("✗ Profile update failed: {e}");
            return;
        }
    }

    match controller.delete_profile().await {
        Ok(()) => println!("✓ Profile deleted"),
        Err(e) => eprintln!("✗ Profile delete failed: {e}"),
    }
}
