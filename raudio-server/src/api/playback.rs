//! Playback API request types and body parsing
//!
//! Bodies are taken as raw bytes and decoded here so that an absent body is
//! accepted (`POST /api/play` with no payload) and a malformed one becomes a
//! regular `400` envelope instead of axum's plain-text rejection.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Body of `POST /api/play` and `POST /api/playlist`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRequest {
    #[serde(default)]
    pub file: Option<String>,
}

impl FileRequest {
    /// The requested file; an empty string counts as not given
    pub fn into_file(self) -> Option<String> {
        self.file.filter(|file| !file.is_empty())
    }
}

/// Body of `POST /api/volume`
///
/// Kept untyped so [`crate::volume::Volume::parse`] can report missing,
/// unparseable and out-of-range values separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeRequest {
    #[serde(default)]
    pub volume: Option<Value>,
}

/// Decode a JSON request body
///
/// An empty body or a literal `null` yields `T::default()`.
pub fn parse_body<T>(body: &Bytes) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::invalid_request(format!("Malformed JSON body: {}", e)))
}
