//! Sprout server binary.

use clap::Parser;
use sprout::{api, open_storage, AppState, Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();

    let config = Config::from_cli(Cli::parse())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    tracing::info!("Sprout v{}", sprout::config::APP_VERSION);

    let storage = open_storage(&config.storage).await?;
    let app = api::router(AppState::new(storage));

    tracing::info!("Starting HTTP server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
    }
}
