//! Client configuration resolved at build time.
//!
//! The WASM bundle cannot read the process environment at runtime, so the
//! backend location is baked in from `RAVEKIDD_API_URL` when the crate is
//! compiled and handed to the component tree as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Settings shared by every page that talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build the config from `RAVEKIDD_API_URL` as seen at compile time.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("RAVEKIDD_API_URL"))
    }

    /// Normalize an optional base URL, falling back to the local backend.
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self { api_base_url }
    }

    /// Absolute URL for `POST /login`.
    pub fn login_endpoint(&self) -> String {
        format!("{}/login", self.api_base_url)
    }

    /// Absolute URL for `POST /validate`.
    pub fn validate_endpoint(&self) -> String {
        format!("{}/validate", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}
