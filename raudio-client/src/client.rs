//! Remote audio server HTTP client
//!
//! Thin wrapper over `reqwest`: one method per server command, each
//! returning the decoded response envelope. The client keeps no player
//! state of its own.

use std::time::Duration;

use raudio_common::ApiResponse;
use reqwest::{Method, Url};
use serde_json::{json, Value};

use crate::error::ClientError;

const USER_AGENT: &str = concat!("raudio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Remote audio server client
#[derive(Debug, Clone)]
pub struct AudioClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl AudioClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:5000`)
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base_url_parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url_parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        // Keep any path prefix when joining endpoint paths
        if !base_url_parsed.path().ends_with('/') {
            let path = format!("{}/", base_url_parsed.path());
            base_url_parsed.set_path(&path);
        }

        Ok(Self {
            http_client: build_http_client()?,
            base_url: base_url_parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path such as `api/status`
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    /// GET /api/status
    pub async fn get_status(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, "api/status", None).await
    }

    /// POST /api/play, optionally switching to `file`
    pub async fn play(&self, file: Option<&str>) -> Result<ApiResponse, ClientError> {
        let body = file.map(|file| json!({ "file": file }));
        self.send(Method::POST, "api/play", body).await
    }

    /// POST /api/pause
    pub async fn pause(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, "api/pause", None).await
    }

    /// POST /api/stop
    pub async fn stop(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, "api/stop", None).await
    }

    /// POST /api/volume
    ///
    /// The value is sent as typed by the user; the server does the parsing
    /// and range check.
    pub async fn set_volume(&self, volume: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, "api/volume", Some(json!({ "volume": volume })))
            .await
    }

    /// GET /api/playlist
    pub async fn get_playlist(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, "api/playlist", None).await
    }

    /// POST /api/playlist
    pub async fn add_to_playlist(&self, file: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, "api/playlist", Some(json!({ "file": file })))
            .await
    }

    /// DELETE /api/playlist
    pub async fn clear_playlist(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::DELETE, "api/playlist", None).await
    }

    /// GET /api/health
    pub async fn health_check(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, "api/health", None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::Protocol(e.to_string())
            } else {
                ClientError::Connectivity {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("HTTP {}: {}", status, e)))?;

        if envelope.success {
            Ok(envelope)
        } else {
            let error = envelope
                .error
                .unwrap_or_else(|| format!("Request failed with HTTP {}", status));
            tracing::debug!(status = status.as_u16(), error = %error, "Request rejected");
            Err(ClientError::Rejected {
                status: status.as_u16(),
                error,
            })
        }
    }
}

fn build_http_client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ClientError::Setup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AudioClient::new("http://localhost:5000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = AudioClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.endpoint("api/status").unwrap().as_str(),
            "http://localhost:5000/api/status"
        );
        assert_eq!(
            client.endpoint("/api/playlist").unwrap().as_str(),
            "http://localhost:5000/api/playlist"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = AudioClient::new("http://media-box:8080/audio").unwrap();
        assert_eq!(
            client.endpoint("api/health").unwrap().as_str(),
            "http://media-box:8080/audio/api/health"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            AudioClient::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AudioClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_http_client_builds_independently_of_url() {
        assert!(build_http_client().is_ok());
    }
}
