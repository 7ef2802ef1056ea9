//! Error types for the profile lookup service
//!
//! Provides unified error handling using thiserror. Each layer has its own
//! error enum; upstream failures are classified into the three outward-facing
//! `LookupError` kinds by the `From<UpstreamError>` conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Errors raised by the bounded cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Key not present in cache
    #[error("Key not found")]
    NotFound,
}

// == Upstream Error Enum ==
/// Failure of a single call to an upstream endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The upstream answered (or the transport reported) a non-success status
    #[error("Upstream returned {status}: {message}")]
    Status {
        /// Numeric HTTP status
        status: u16,
        /// Reason phrase for the status
        message: String,
    },

    /// Anything without a status: network failures, unreadable or undecodable bodies
    #[error("Upstream call failed: {0}")]
    Unknown(String),
}

impl UpstreamError {
    /// Builds a `Status` error, using the canonical reason phrase when one exists.
    pub fn from_status(status: u16) -> Self {
        let message = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());
        UpstreamError::Status { status, message }
    }
}

// == Lookup Error Enum ==
/// The only failure kinds visible to callers of a lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The handle failed validation; no cache or upstream access happened
    #[error("Invalid handle: {0}")]
    BadRequest(String),

    /// An upstream call returned a non-success result
    #[error("Failed to get response from upstream - {0}")]
    UpstreamFailure(String),

    /// Any other failure
    #[error("unknown error")]
    UnknownFailure,
}

// == Classification ==
impl From<UpstreamError> for LookupError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { message, .. } => LookupError::UpstreamFailure(message),
            UpstreamError::Unknown(_) => LookupError::UnknownFailure,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::BadRequest(_) => StatusCode::BAD_REQUEST,
            LookupError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LookupError::UnknownFailure => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
