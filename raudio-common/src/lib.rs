//! # Remote Audio Common Library
//!
//! Shared code for the remote audio server and its command-line client:
//! - Wire types (playback status, state snapshot, response envelope)
//! - Configuration file loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;

pub use api::{ApiResponse, HealthResponse, PlaybackStatus, PlayerSnapshot, PlaylistData};
pub use error::{Error, Result};
