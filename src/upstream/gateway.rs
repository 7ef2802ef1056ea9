//! Upstream gateway
//!
//! Resolves a handle to its profile and repository-list resources and
//! decodes the JSON bodies.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::models::{ProfileRaw, RepoRef};
use crate::upstream::HttpFetch;

/// Default base address of the user resources
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users";

// == Gateway ==
/// The two upstream calls a lookup needs. Each is a single attempt.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    async fn fetch_profile(
        &self,
        handle: &str,
        token: Option<&str>,
    ) -> Result<ProfileRaw, UpstreamError>;

    async fn fetch_repos(
        &self,
        handle: &str,
        token: Option<&str>,
    ) -> Result<Vec<RepoRef>, UpstreamError>;
}

/// Decodes a JSON body; failures have no status and classify as `Unknown`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, UpstreamError> {
    serde_json::from_slice(body)
        .map_err(|e| UpstreamError::Unknown(format!("invalid upstream payload: {}", e)))
}

// == HTTP Gateway ==
/// `UpstreamGateway` reading `<base>/<handle>` and `<base>/<handle>/repos`.
#[derive(Debug, Clone)]
pub struct HttpGateway<T> {
    transport: Arc<T>,
    base_url: String,
}

impl<T: HttpFetch> HttpGateway<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport: Arc::new(transport),
            base_url,
        }
    }

    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/{}", self.base_url, handle)
    }

    pub fn repos_url(&self, handle: &str) -> String {
        format!("{}/{}/repos", self.base_url, handle)
    }
}

#[async_trait]
impl<T: HttpFetch> UpstreamGateway for HttpGateway<T> {
    async fn fetch_profile(
        &self,
        handle: &str,
        token: Option<&str>,
    ) -> Result<ProfileRaw, UpstreamError> {
        let body = self.transport.fetch(&self.profile_url(handle), token).await?;
        decode_json(&body)
    }

    async fn fetch_repos(
        &self,
        handle: &str,
        token: Option<&str>,
    ) -> Result<Vec<RepoRef>, UpstreamError> {
        let body = self.transport.fetch(&self.repos_url(handle), token).await?;
        decode_json(&body)
    }
}
