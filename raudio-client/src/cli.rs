//! Command-line interface for the `raudio` binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use raudio_common::config::TomlConfig;
use raudio_common::ApiResponse;

use crate::client::AudioClient;
use crate::error::ClientError;

#[derive(Parser, Debug)]
#[command(name = "raudio")]
#[command(about = "Control a remote audio server")]
#[command(version)]
pub struct Cli {
    /// Server base URL (default from config file, else http://localhost:5000)
    #[arg(short, long, env = "RAUDIO_SERVER_URL", global = true)]
    pub server: Option<String>,

    /// Path to config.toml (default: platform config dir)
    #[arg(short, long, env = "RAUDIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Server URL from `--server`, else the config file, else the default
    ///
    /// The config file is not read at all when `--server` is given.
    pub fn server_url(&self) -> Result<String, ClientError> {
        match &self.server {
            Some(url) => Ok(url.clone()),
            None => Ok(TomlConfig::load_or_default(self.config.as_deref())?
                .client
                .server_url),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get player status
    Status,

    /// Play an audio file, or resume the current one
    Play {
        /// File to play
        file: Option<String>,
    },

    /// Pause playback
    Pause,

    /// Stop playback
    Stop,

    /// Set volume (0-100)
    Volume {
        /// Volume level; validated by the server
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show playlist
    Playlist,

    /// Add a file to the playlist
    Add {
        /// File to add
        file: String,
    },

    /// Clear the playlist
    Clear,

    /// Check server health
    Health,
}

/// Issue `command` against the server
pub async fn execute(client: &AudioClient, command: &Command) -> Result<ApiResponse, ClientError> {
    match command {
        Command::Status => client.get_status().await,
        Command::Play { file } => client.play(file.as_deref()).await,
        Command::Pause => client.pause().await,
        Command::Stop => client.stop().await,
        Command::Volume { value } => client.set_volume(value).await,
        Command::Playlist => client.get_playlist().await,
        Command::Add { file } => client.add_to_playlist(file).await,
        Command::Clear => client.clear_playlist().await,
        Command::Health => client.health_check().await,
    }
}
