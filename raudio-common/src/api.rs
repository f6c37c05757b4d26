//! Shared API request/response types
//!
//! Every response from the server is wrapped in an [`ApiResponse`] envelope:
//!
//! ```json
//! { "success": true, "message": "Playing song.mp3", "data": { ... } }
//! { "success": false, "error": "Audio is not playing" }
//! ```
//!
//! The server serializes typed envelopes (`ApiResponse<PlayerSnapshot>`), the
//! client deserializes the default `ApiResponse<Value>` so it can print any
//! payload verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Playback status of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackStatus::Stopped => write!(f, "stopped"),
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
        }
    }
}

/// Point-in-time copy of the player state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub status: PlaybackStatus,
    pub current_file: Option<String>,
    /// 0-100
    pub volume: u8,
    pub position: u64,
    pub playlist: Vec<String>,
}

/// Playlist payload (`GET/POST/DELETE /api/playlist`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaylistData {
    pub playlist: Vec<String>,
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Any additional top-level fields (e.g. `version` on health responses)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            extra: Map::new(),
        }
    }

    /// Failed response carrying a human-readable error
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
            extra: Map::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<Value> {
    /// Decode `data` as a state snapshot, if it is one
    pub fn snapshot(&self) -> Option<PlayerSnapshot> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }

    /// Decode `data` as a playlist payload, if it is one
    pub fn playlist(&self) -> Option<Vec<String>> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value::<PlaylistData>(data.clone()).ok())
            .map(|data| data.playlist)
    }
}

/// Health check response (`GET /api/health`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub module: String,
}
