//! Profile records
//!
//! `ProfileRaw` and `RepoRef` mirror the upstream payloads; `Profile` is the
//! merged record served to callers and stored in the cache.

use serde::{Deserialize, Serialize};

/// User document returned by the upstream profile endpoint.
///
/// Only the fields listed here are read; anything else in the payload is
/// ignored. Missing or `null` fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileRaw {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
}

/// Minimal repository descriptor, kept in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl RepoRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }
}

// == Profile ==
/// Merged user record: profile fields plus the repository list.
///
/// Serialized with the field names the lookup endpoint has always returned
/// (`user_name`, `display_name`, `avatar`, `geo_location`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "user_name")]
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub geo_location: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub repos: Vec<RepoRef>,
}

impl Profile {
    // == Merge ==
    /// Combines both upstream results for `handle` into one record.
    pub fn merge(handle: impl Into<String>, raw: ProfileRaw, repos: Vec<RepoRef>) -> Self {
        Self {
            handle: handle.into(),
            display_name: raw.name,
            avatar: raw.avatar_url,
            geo_location: raw.location,
            email: raw.email,
            url: raw.url,
            created_at: raw.created_at,
            repos,
        }
    }
}
