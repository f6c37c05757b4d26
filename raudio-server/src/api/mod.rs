//! REST API for the remote audio server
//!
//! | Method | Path            | Handler                      |
//! |--------|-----------------|------------------------------|
//! | GET    | /api/status     | [`handlers::get_status`]     |
//! | POST   | /api/play       | [`handlers::play`]           |
//! | POST   | /api/pause      | [`handlers::pause`]          |
//! | POST   | /api/stop       | [`handlers::stop`]           |
//! | POST   | /api/volume     | [`handlers::set_volume`]     |
//! | GET    | /api/playlist   | [`handlers::get_playlist`]   |
//! | POST   | /api/playlist   | [`handlers::add_to_playlist`]|
//! | DELETE | /api/playlist   | [`handlers::clear_playlist`] |
//! | GET    | /api/health     | [`handlers::health`]         |

pub mod handlers;
pub mod playback;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::PlayerStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The one player state store
    pub store: Arc<PlayerStore>,
}

impl AppState {
    pub fn new(store: Arc<PlayerStore>) -> Self {
        Self { store }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check, also exposed without the prefix for monitoring
        .route("/health", get(handlers::health))
        .nest(
            "/api",
            Router::new()
                .route("/health", get(handlers::health))
                .route("/status", get(handlers::get_status))
                .route("/play", post(handlers::play))
                .route("/pause", post(handlers::pause))
                .route("/stop", post(handlers::stop))
                .route("/volume", post(handlers::set_volume))
                .route(
                    "/playlist",
                    get(handlers::get_playlist)
                        .post(handlers::add_to_playlist)
                        .delete(handlers::clear_playlist),
                ),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
