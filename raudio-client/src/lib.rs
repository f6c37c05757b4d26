//! # Remote Audio Client Library (raudio-client)
//!
//! HTTP client and command-line front end for `raudio-server`.

pub mod cli;
pub mod client;
pub mod error;

pub use client::AudioClient;
pub use error::ClientError;
