//! Remote Audio Server (raudio-server) - Main entry point

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use raudio_server::config::{Args, ServerConfig};
use raudio_server::{server, PlayerStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServerConfig::load(&args).context("Failed to load configuration")?;

    // RUST_LOG wins over --log-level / config file
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "raudio_server={level},raudio_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Remote Audio Server (raudio-server) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let store = Arc::new(PlayerStore::new());
    info!("Player state initialized");

    server::run(config, store).await.context("Server error")?;

    Ok(())
}
