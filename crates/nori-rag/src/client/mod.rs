//! HTTP client for the retrieval backend.
//!
//! POSTs the assembled request as JSON and hands back the raw status and
//! body. One attempt per turn, bounded by the configured timeout.

mod api;
mod config;
mod http;

#[cfg(test)]
mod tests;

pub use config::{BackendConfig, DEFAULT_TIMEOUT};
pub use http::HttpBackend;
