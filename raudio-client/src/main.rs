//! Remote Audio Client (raudio) - Main entry point
//!
//! Prints the server's JSON response on stdout. Exit status: 0 on success,
//! 1 when the request was rejected or could not be set up, 2 when the server
//! could not be reached.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use raudio_client::cli::{execute, Cli};
use raudio_client::{AudioClient, ClientError};
use raudio_common::ApiResponse;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raudio=warn,raudio_client=warn,raudio_common=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = match cli.server_url().and_then(|url| AudioClient::new(&url)) {
        Ok(client) => client,
        Err(e) => return report(&e),
    };

    match execute(&client, &cli.command).await {
        Ok(response) => {
            print_response(&response)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report(&e),
    }
}

/// Print the failure envelope and map the error to an exit status
fn report(e: &ClientError) -> Result<ExitCode> {
    if e.is_connectivity() {
        warn!("{}", e);
    }
    print_response(&e.to_response())?;
    Ok(ExitCode::from(e.exit_code()))
}

fn print_response(response: &ApiResponse) -> Result<()> {
    let text = serde_json::to_string_pretty(response).context("Failed to format response")?;
    println!("{}", text);
    Ok(())
}
