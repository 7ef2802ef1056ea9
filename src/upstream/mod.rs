//! Upstream Module
//!
//! Access to the remote profile and repository-list APIs.

mod gateway;
mod transport;

pub use gateway::{decode_json, HttpGateway, UpstreamGateway, DEFAULT_BASE_URL};
pub use transport::{HttpFetch, ReqwestTransport, USER_AGENT};
