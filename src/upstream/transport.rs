//! Upstream transport
//!
//! The narrow "fetch a URL, optionally with a bearer token" capability the
//! gateway is built on, and its reqwest implementation.

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::error::UpstreamError;

/// User agent sent on every upstream request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// == Fetch Capability ==
/// Issues one GET and returns the raw response body.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Fetches `url`; a non-empty `token` is sent as a bearer credential.
    async fn fetch(&self, url: &str, token: Option<&str>) -> Result<Vec<u8>, UpstreamError>;
}

// == Reqwest Transport ==
/// `HttpFetch` over a pooled reqwest client.
///
/// No timeout or retry is configured here.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpstreamError::Unknown(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps a preconfigured client; it should set its own user agent.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Maps a reqwest failure: errors carrying a status become `Status`.
fn classify(err: reqwest::Error) -> UpstreamError {
    match err.status() {
        Some(status) => UpstreamError::from_status(status.as_u16()),
        None => UpstreamError::Unknown(err.to_string()),
    }
}

#[async_trait]
impl HttpFetch for ReqwestTransport {
    async fn fetch(&self, url: &str, token: Option<&str>) -> Result<Vec<u8>, UpstreamError> {
        let mut request = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "upstream responded");

        if !status.is_success() {
            return Err(UpstreamError::from_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        Ok(body.to_vec())
    }
}
