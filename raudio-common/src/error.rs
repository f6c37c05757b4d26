//! Common error types for raudio

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for raudio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by the server and client crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
