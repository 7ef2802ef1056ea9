//! Profile Cache - user profile lookups behind a bounded LRU cache
//!
//! Aggregates an upstream user profile and repository list into one record,
//! and serves repeated lookups for a handle from memory.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{LookupError, UpstreamError};
pub use lookup::LookupService;
