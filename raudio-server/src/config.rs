//! raudio-server configuration
//!
//! Settings priority:
//! 1. Command-line arguments (`--host`, `--port`, `--log-level`)
//! 2. Environment variables (`RAUDIO_HOST`, `RAUDIO_PORT`)
//! 3. TOML configuration file (`[server]`, `[logging]`)
//! 4. Built-in defaults (`0.0.0.0:5000`, `info`)
//!
//! Clap merges 1 and 2; [`ServerConfig::resolve`] layers them over 3 and 4.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use clap::Parser;
use raudio_common::config::TomlConfig;

use crate::error::{Error, Result};

/// Command-line arguments for raudio-server
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "raudio-server")]
#[command(about = "Remote control server for an audio player")]
#[command(version)]
pub struct Args {
    /// Address to bind (IP or hostname)
    #[arg(long, env = "RAUDIO_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RAUDIO_PORT")]
    pub port: Option<u16>,

    /// Path to config.toml (default: platform config dir)
    #[arg(short, long, env = "RAUDIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

impl ServerConfig {
    /// Load the config file named by `args` (or the default one) and resolve
    pub fn load(args: &Args) -> Result<Self> {
        let toml = TomlConfig::load_or_default(args.config.as_deref())?;
        Self::resolve(args, &toml)
    }

    /// Layer command-line/environment values over the config file
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Result<Self> {
        let host = args.host.as_deref().unwrap_or(&toml.server.host);
        let port = args.port.unwrap_or(toml.server.port);

        let bind_addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| Error::Config(format!("Invalid bind address {}:{}: {}", host, port, e)))?
            .next()
            .ok_or_else(|| Error::Config(format!("No address found for {}:{}", host, port)))?;

        let log_level = args
            .log_level
            .clone()
            .unwrap_or_else(|| toml.logging.level.clone());

        Ok(Self {
            bind_addr,
            log_level,
        })
    }
}
