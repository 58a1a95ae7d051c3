//! REST API client for the estate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpAuthApi`] answers every call
//! with [`ApiError::Unavailable`]; workflows are exercised through the
//! [`AuthApi`] trait instead.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`]. Non-success responses keep the
//! backend's `{message}` text when it can be decoded so pages can show it
//! verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, VerifyResponse};
use crate::config;

pub const LOGIN_PATH: &str = "/login";
pub const VERIFY_PATH: &str = "/verify";
pub const REGISTER_PATH: &str = "/register";

/// Shown when a request fails without a backend-provided message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("response parse failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to display for this failure: the backend message when one was
    /// returned, otherwise [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Operations the auth workflows need from the backend.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /login` with the submitted credentials.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// `GET /verify` presenting `token` in the `x-auth-token` header.
    /// Only an HTTP 200 yields a role; any other success status is `Ok(None)`.
    async fn verify(&self, token: &str) -> Result<Option<VerifyResponse>, ApiError>;
    /// `POST /register` with the full profile.
    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError>;
}

/// Join the API base URL and an endpoint path.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// HTTP implementation of [`AuthApi`] against a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let message = resp.json::<MessageResponse>().await.ok().and_then(|body| body.message);
        return Err(ApiError::Status { status: resp.status(), message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_PATH))
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn verify(&self, token: &str) -> Result<Option<VerifyResponse>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(VERIFY_PATH))
                .header(config::TOKEN_KEY, token)
                .send()
                .await
                .map_err(network_error)?;
            if resp.ok() && resp.status() != 200 {
                return Ok(None);
            }
            decode(resp).await.map(Some)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(REGISTER_PATH))
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
