//! Lookup Service
//!
//! Cache-aside orchestration: serve a handle from the cache, or fetch the
//! profile and repository list upstream, merge them, and cache the result.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cache::SharedCache;
use crate::error::{LookupError, UpstreamError};
use crate::lookup::validate_handle;
use crate::models::Profile;
use crate::upstream::UpstreamGateway;

// == Lookup Service ==
/// Entry point for profile lookups.
///
/// Owns a handle to the profile cache and the gateway used on a miss.
/// Concurrent misses for the same handle each fetch upstream; the last
/// completed put wins.
#[derive(Clone)]
pub struct LookupService {
    cache: SharedCache<String, Profile>,
    gateway: Arc<dyn UpstreamGateway>,
    token: Option<String>,
}

impl LookupService {
    /// Creates a service; an empty token is treated as no token.
    pub fn new(
        cache: SharedCache<String, Profile>,
        gateway: Arc<dyn UpstreamGateway>,
        token: Option<String>,
    ) -> Self {
        Self {
            cache,
            gateway,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn cache(&self) -> &SharedCache<String, Profile> {
        &self.cache
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // == Lookup ==
    /// Returns the merged profile for `handle`.
    ///
    /// Invalid handles fail before the cache or upstream is touched. A failed
    /// upstream call leaves the cache unchanged.
    pub async fn lookup(&self, handle: &str) -> Result<Profile, LookupError> {
        if let Err(err) = validate_handle(handle) {
            debug!("bad handle received");
            return Err(err);
        }
        info!(handle, "handle received");

        if let Some(profile) = self.cache.get_if_present(handle).await {
            info!(handle, "found in cache; skipping upstream");
            return Ok(profile);
        }

        let profile = self.fetch_and_merge(handle).await.map_err(|err| {
            match &err {
                UpstreamError::Status { status, message } => {
                    error!(handle, status, "Failed to get response from upstream - {}", message);
                }
                UpstreamError::Unknown(reason) => {
                    error!(handle, "unknown error - {}", reason);
                }
            }
            LookupError::from(err)
        })?;

        if let Some(evicted) = self.cache.put(handle.to_string(), profile.clone()).await {
            debug!(handle, evicted = %evicted, "evicted least recently used profile");
        }

        Ok(profile)
    }

    /// Fetches both resources concurrently; the first failure wins.
    async fn fetch_and_merge(&self, handle: &str) -> Result<Profile, UpstreamError> {
        let token = self.token.as_deref();
        let (raw, repos) = tokio::try_join!(
            self.gateway.fetch_profile(handle, token),
            self.gateway.fetch_repos(handle, token),
        )?;
        Ok(Profile::merge(handle, raw, repos))
    }
}
