//! REST client for the two auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Only an exact HTTP 200 counts as success. Every other status, transport
//! failure, or undecodable body becomes an [`ApiError`]; callers turn those
//! into state transitions and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::LoginRequest;
#[cfg(feature = "hydrate")]
use super::types::LoginResponse;
use crate::config::ClientConfig;

pub const HTTP_OK: u16 = 200;

/// Errors produced by auth endpoint calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Backend operations the session core depends on.
///
/// Futures are `?Send`: the browser runs everything on one event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for an access token via `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    /// Check a stored token via `POST /validate`.
    async fn validate(&self, token: &str) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a response status to the endpoint success contract.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn expect_ok(status: u16) -> Result<(), ApiError> {
    if status == HTTP_OK {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// `gloo-net` backed implementation pointed at the configured backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    login_url: String,
    validate_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            login_url: config.login_endpoint(),
            validate_url: config.validate_endpoint(),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.login_url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            expect_ok(resp.status())?;
            let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.access_token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.login_url);
            Err(ApiError::Unavailable)
        }
    }

    async fn validate(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.validate_url)
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            expect_ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &self.validate_url);
            Err(ApiError::Unavailable)
        }
    }
}
