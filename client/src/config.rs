//! Build-time client configuration.
//!
//! The estate API base URL is baked into the WASM bundle at compile time via
//! `ESTATE_API_URL`; there is no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// `localStorage` key (and request header name) carrying the session token.
pub const TOKEN_KEY: &str = "x-auth-token";

/// Base URL of the estate API without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("ESTATE_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

pub(crate) fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
