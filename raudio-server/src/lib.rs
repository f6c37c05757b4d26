//! # Remote Audio Server Library (raudio-server)
//!
//! Holds the state of a (simulated) audio player and exposes it as a JSON
//! REST API.
//!
//! **Architecture:** a single [`PlayerStore`] owns the [`player::PlayerState`]
//! record behind a mutex. Axum handlers receive the store through router
//! state and apply one transition per request inside
//! [`PlayerStore::with_state`].

pub mod api;
pub mod config;
pub mod error;
pub mod player;
pub mod server;
pub mod state;
pub mod volume;

pub use error::{Error, Result};
pub use state::PlayerStore;
