//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in from `HEALTHSPACE_API_URL` when the crate is compiled and
//! provided to pages through the `ApiClient` context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the JSON-encoded session user.
pub const USER_KEY: &str = "user";

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://api.example.com/api/v1`.
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Build config from the compile-time `HEALTHSPACE_API_URL` variable.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("HEALTHSPACE_API_URL"))
    }

    /// Build config from an optional raw base URL, falling back to the default
    /// when it is absent or blank.
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, request_timeout: REQUEST_TIMEOUT }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}
