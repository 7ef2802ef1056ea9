//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::LookupError;
use crate::lookup::LookupService;
use crate::models::{HealthResponse, Profile, StatsResponse};
use crate::upstream::{HttpGateway, ReqwestTransport};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside lookup service
    pub lookups: Arc<LookupService>,
}

impl AppState {
    /// Creates a new AppState around the given lookup service.
    pub fn new(lookups: LookupService) -> Self {
        Self {
            lookups: Arc::new(lookups),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the profile cache, the reqwest transport and the upstream
    /// gateway. Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let cache = SharedCache::new(config.cache_capacity)?;
        let transport = ReqwestTransport::new()?;
        let gateway = HttpGateway::new(transport, config.upstream_base_url.clone());
        let lookups = LookupService::new(cache, Arc::new(gateway), config.upstream_token.clone());
        Ok(Self::new(lookups))
    }
}

/// Handler for GET /users/:handle
///
/// Returns the merged profile, from cache when present. A path that cannot
/// be decoded is rejected with the same JSON error body as an invalid handle.
pub async fn user_handler(
    State(state): State<AppState>,
    handle: Result<Path<String>, PathRejection>,
) -> Result<Json<Profile>, LookupError> {
    let Path(handle) =
        handle.map_err(|rejection| LookupError::BadRequest(rejection.body_text()))?;
    let profile = state.lookups.lookup(&handle).await?;
    Ok(Json(profile))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.lookups.cache();
    let stats = cache.stats().await;
    Json(StatsResponse::new(&stats, cache.capacity().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_state(capacity: usize) -> AppState {
        let config = Config {
            cache_capacity: capacity,
            // Nothing listens here; tests below only hit the cache.
            upstream_base_url: "http://127.0.0.1:9/users".to_string(),
            ..Config::default()
        };
        AppState::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_from_config_rejects_zero_capacity() {
        let config = Config {
            cache_capacity: 0,
            ..Config::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_user_handler_serves_cached_profile() {
        let state = offline_state(10);
        let cached = Profile::merge("octocat", Default::default(), vec![]);
        state
            .lookups
            .cache()
            .put("octocat".to_string(), cached.clone())
            .await;

        let Json(profile) = user_handler(State(state), Ok(Path("octocat".to_string())))
            .await
            .unwrap();

        assert_eq!(profile, cached);
    }

    #[tokio::test]
    async fn test_user_handler_rejects_invalid_handle() {
        let state = offline_state(10);

        let result = user_handler(State(state), Ok(Path("bad handle".to_string()))).await;

        assert!(matches!(result, Err(LookupError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = offline_state(5);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.capacity, 5);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
