// backend/services/account-api/src/main.rs

use account_api::{router, ApiConfig, AppState};
use shared_kernel::infrastructure::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("account-api");

    let config = ApiConfig::from_env()?;
    let state = AppState::from_config(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "✅ account-api listening");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
