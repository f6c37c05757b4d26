//! HTTP request handlers
//!
//! Each handler validates its input first, then performs its whole
//! read-modify-write inside a single [`PlayerStore::with_state`] call and
//! builds the response from the snapshot taken under that same lock.
//!
//! [`PlayerStore::with_state`]: crate::state::PlayerStore::with_state

use axum::{body::Bytes, extract::State, Json};
use raudio_common::{ApiResponse, HealthResponse, PlayerSnapshot, PlaylistData};
use tracing::{debug, info};

use super::playback::{parse_body, FileRequest, VolumeRequest};
use super::AppState;
use crate::error::{Error, Result};
use crate::volume::Volume;

/// Handler result: success envelope or a rejected-request error
pub type ApiResult<T> = Result<Json<ApiResponse<T>>>;

// ============================================================================
// Health Endpoint
// ============================================================================

/// GET /api/health - Health check endpoint (no state access)
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Remote Audio Server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        module: "raudio-server".to_string(),
    })
}

// ============================================================================
// Playback Control Endpoints
// ============================================================================

/// GET /api/status - Full player state snapshot
pub async fn get_status(State(app): State<AppState>) -> Json<ApiResponse<PlayerSnapshot>> {
    let snapshot = app.store.snapshot();
    debug!(status = %snapshot.status, "Status requested");
    Json(ApiResponse::success(snapshot))
}

/// POST /api/play - Start playback of `file`, or resume the current file
pub async fn play(State(app): State<AppState>, body: Bytes) -> ApiResult<PlayerSnapshot> {
    let file = parse_body::<FileRequest>(&body)?.into_file();

    let (current, snapshot) = app.store.with_state(|player| {
        let current = player.play(file)?.to_string();
        Ok::<_, Error>((current, player.snapshot()))
    })?;

    info!(file = %current, "Playback started");
    Ok(Json(
        ApiResponse::success(snapshot).with_message(format!("Playing {}", current)),
    ))
}

/// POST /api/pause - Pause playback (only while playing)
pub async fn pause(State(app): State<AppState>) -> ApiResult<PlayerSnapshot> {
    let snapshot = app.store.with_state(|player| {
        player.pause()?;
        Ok::<_, Error>(player.snapshot())
    })?;

    info!("Playback paused");
    Ok(Json(ApiResponse::success(snapshot).with_message("Audio paused")))
}

/// POST /api/stop - Stop playback from any status
pub async fn stop(State(app): State<AppState>) -> Json<ApiResponse<PlayerSnapshot>> {
    let snapshot = app.store.with_state(|player| {
        player.stop();
        player.snapshot()
    });

    info!("Playback stopped");
    Json(ApiResponse::success(snapshot).with_message("Audio stopped"))
}

/// POST /api/volume - Set volume level (0-100)
pub async fn set_volume(State(app): State<AppState>, body: Bytes) -> ApiResult<PlayerSnapshot> {
    let request = parse_body::<VolumeRequest>(&body)?;
    let volume = Volume::parse(request.volume.as_ref())?;

    let (old_volume, snapshot) = app.store.with_state(|player| {
        let old_volume = player.volume();
        player.set_volume(volume);
        (old_volume, player.snapshot())
    });

    info!("Volume changed: {} -> {}", old_volume, volume);
    Ok(Json(
        ApiResponse::success(snapshot).with_message(format!("Volume set to {}", volume)),
    ))
}

// ============================================================================
// Playlist Endpoints
// ============================================================================

/// GET /api/playlist - Current playlist
pub async fn get_playlist(State(app): State<AppState>) -> Json<ApiResponse<PlaylistData>> {
    let playlist = app.store.with_state(|player| player.playlist().to_vec());
    debug!(entries = playlist.len(), "Playlist requested");
    Json(ApiResponse::success(PlaylistData { playlist }))
}

/// POST /api/playlist - Append a file (re-adding an existing entry is a no-op)
pub async fn add_to_playlist(State(app): State<AppState>, body: Bytes) -> ApiResult<PlaylistData> {
    let file = parse_body::<FileRequest>(&body)?
        .into_file()
        .ok_or_else(|| Error::invalid_request("File parameter required"))?;

    let (added, playlist) = app.store.with_state(|player| {
        let added = player.add_to_playlist(file.clone());
        (added, player.playlist().to_vec())
    });

    if added {
        info!(file = %file, entries = playlist.len(), "Added to playlist");
    } else {
        debug!(file = %file, "Already in playlist");
    }
    Ok(Json(
        ApiResponse::success(PlaylistData { playlist })
            .with_message(format!("Added {} to playlist", file)),
    ))
}

/// DELETE /api/playlist - Empty the playlist
pub async fn clear_playlist(State(app): State<AppState>) -> Json<ApiResponse<PlaylistData>> {
    let removed = app.store.with_state(|player| player.clear_playlist());

    info!(removed, "Playlist cleared");
    Json(ApiResponse::success(PlaylistData::default()).with_message("Playlist cleared"))
}
