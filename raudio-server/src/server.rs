//! HTTP server setup
//!
//! Binds the configured address and serves the API router until Ctrl+C or
//! SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::state::PlayerStore;

/// Run HTTP API server
pub async fn run(config: ServerConfig, store: Arc<PlayerStore>) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| Error::Http(format!("Failed to bind to {}: {}", config.bind_addr, e)))?;

    info!("Remote Audio Server listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/api/health", config.bind_addr);

    serve(listener, store).await
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, store: Arc<PlayerStore>) -> Result<()> {
    let app = create_router(AppState::new(store));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
