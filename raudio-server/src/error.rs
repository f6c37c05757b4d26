//! Error types for raudio-server
//!
//! Handler failures (`InvalidRequest`, `InvalidState`) render as
//! `400 {"success": false, "error": "..."}`. The remaining variants only
//! occur during startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use raudio_common::ApiResponse;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Main error type for raudio-server
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed, missing or out-of-range input
    #[error("{0}")]
    InvalidRequest(String),

    /// Operation not valid in the current playback status
    #[error("{0}")]
    InvalidState(String),

    /// Configuration resolution errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file errors
    #[error(transparent)]
    Common(#[from] raudio_common::Error),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),
}

/// Convenience Result type using raudio-server Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) | Error::InvalidState(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Common(_) | Error::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!(error = %self, "Request rejected");
        } else {
            error!(error = %self, "Request failed");
        }

        let body: ApiResponse<Value> = ApiResponse::failure(self.to_string());
        (status, Json(body)).into_response()
    }
}
