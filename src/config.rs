//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_CAPACITY;
use crate::upstream::DEFAULT_BASE_URL;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of profiles the cache can hold
    pub cache_capacity: usize,
    /// Bearer token for upstream calls; `None` sends no credential
    pub upstream_token: Option<String>,
    /// Base address of the upstream user resources
    pub upstream_base_url: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached profiles (default: 1000)
    /// - `API_ACCESS_TOKEN` - Upstream bearer token (default: none; empty means none)
    /// - `UPSTREAM_BASE_URL` - Upstream user resource base (default: https://api.github.com/users)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            upstream_token: env::var("API_ACCESS_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            upstream_token: None,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            server_port: 3000,
        }
    }
}
