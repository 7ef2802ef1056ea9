//! Handle validation

use crate::error::LookupError;

/// Longest handle accepted
pub const MAX_HANDLE_LENGTH: usize = 39;

/// Non-empty, at most 39 characters, ASCII letters, digits and `-` only.
pub fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle.len() <= MAX_HANDLE_LENGTH
        && handle.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub fn validate_handle(handle: &str) -> Result<(), LookupError> {
    if is_valid_handle(handle) {
        Ok(())
    } else {
        Err(LookupError::BadRequest(format!(
            "only letters, numbers, and - allowed. Must not exceed {} chars",
            MAX_HANDLE_LENGTH
        )))
    }
}
