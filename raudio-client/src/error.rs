//! Client error types
//!
//! Separates "the server said no" ([`ClientError::Rejected`]) from "the
//! request never got there" ([`ClientError::Connectivity`]).

use raudio_common::ApiResponse;
use thiserror::Error;

/// Remote audio client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server unreachable (connection refused, DNS failure, timeout)
    #[error("Cannot connect to server at {url}. Is it running? ({reason})")]
    Connectivity { url: String, reason: String },

    /// Server answered with `success: false`
    #[error("Request rejected (HTTP {status}): {error}")]
    Rejected { status: u16, error: String },

    /// Server answered with something other than a response envelope
    #[error("Unexpected response: {0}")]
    Protocol(String),

    /// Base URL could not be parsed
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be initialized (TLS or backend setup)
    #[error("Failed to initialize HTTP client: {0}")]
    Setup(String),

    /// Config file could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    Config(#[from] raudio_common::Error),
}

impl ClientError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Connectivity { .. })
    }

    /// Process exit code for the CLI: 2 when unreachable, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_connectivity() {
            2
        } else {
            1
        }
    }

    /// Failure envelope to print in place of a server response
    ///
    /// A rejection reproduces the server's own `{"success": false, "error"}`.
    pub fn to_response(&self) -> ApiResponse {
        match self {
            ClientError::Rejected { error, .. } => ApiResponse::failure(error.clone()),
            other => ApiResponse::failure(other.to_string()),
        }
    }
}
