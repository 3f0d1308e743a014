//! Inkpost Server: a minimal blog with token-authenticated admin posting.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use inkpost_core::config::AppConfig;
use inkpost_core::error::AppError;
use inkpost_database::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("INKPOST_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Inkpost v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Store connection + migrations ────────────────────
    tracing::info!(provider = %config.database.provider, "Connecting to store...");
    let stores = StoreManager::connect(&config.database).await?;
    tracing::info!(provider = stores.provider_name(), "Store ready");

    // ── Step 2: Build and start HTTP server ──────────────────────
    inkpost_api::run_server(config, stores).await?;

    tracing::info!("Inkpost server shut down gracefully");
    Ok(())
}
