//! Generic JSON HTTP client for the UserHub API
//!
//! Thin wrapper around `reqwest` holding the server base address. Each helper
//! issues a single request and surfaces any failure to the caller; there are
//! no retries and no recovery here.

use crate::config::defaults::DEFAULT_CONNECT_TIMEOUT_SECS;
use crate::error::{CliError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON HTTP client bound to a single server base address
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base address with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, crate::config::defaults::default_timeout())
    }

    /// Create a client with an explicit request timeout
    ///
    /// The base address is stored with any trailing `/` trimmed and is
    /// prefixed unchanged onto every request path for the lifetime of the
    /// client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true) // Disable Nagle's algorithm (lower latency)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CliError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base address this client was constructed with
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET request with JSON response
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = checked(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST request with JSON request and response
    pub async fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, data: &T) -> Result<R> {
        let response = self.http.post(self.url(path)).json(data).send().await?;
        let body = checked(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// PUT request with JSON request body, response body discarded
    pub async fn put<T: Serialize>(&self, path: &str, data: &T) -> Result<()> {
        let response = self.http.put(self.url(path)).json(data).send().await?;
        let _ = checked(response).await?;
        Ok(())
    }

    /// DELETE request with no body
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        let _ = checked(response).await?;
        Ok(())
    }
}

/// Error payload the server attaches to non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-success response into an API error carrying status and message
async fn checked(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    // The server reports failures as {"error": "..."}; fall back to raw text
    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);

    Err(CliError::Api {
        status: status.as_u16(),
        message,
    })
}
