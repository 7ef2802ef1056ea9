//! Lookup Module
//!
//! Handle validation and the cache-aside lookup service.

mod handle;
mod service;

pub use handle::{is_valid_handle, validate_handle, MAX_HANDLE_LENGTH};
pub use service::LookupService;
