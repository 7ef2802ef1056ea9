//! Data models for the profile lookup service
//!
//! Upstream payloads, the merged profile record, and the DTOs used for
//! the remaining HTTP responses.

pub mod profile;
pub mod responses;

// Re-export commonly used types
pub use profile::{Profile, ProfileRaw, RepoRef};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
