//! REST client for the external user API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since the
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx replies and undecodable bodies all come back
//! as `ApiError`. Pages only need `ApiError::user_message` to decide what to
//! show; the variant is kept for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Credentials, LoginResponse, RegisterResponse};
#[cfg(feature = "hydrate")]
use super::types::ErrorBody;

/// Base URL baked in at build time; empty means same origin.
const API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server rejected request ({status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Non-empty `error` text the server sent with a rejection.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// What to tell the user: the server's own text when it sent one,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// The two calls the sign-in screen makes against the user API.
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// `POST /api/users/login`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a
    /// success body without `user_id`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /api/users/register`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError>;
}

/// `AuthApi` over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: normalize_base(&base.into()) }
    }

    /// Client pointed at the build-time `API_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(API_BASE_URL.unwrap_or_default())
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn login_endpoint(base: &str) -> String {
    format!("{base}/api/users/login")
}

fn register_endpoint(base: &str) -> String {
    format!("{base}/api/users/register")
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = login_endpoint(&self.base);
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&url, credentials).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        let url = register_endpoint(&self.base);
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&url, credentials).await?;
            // Success text is optional; an unreadable body still counts as registered.
            Ok(resp.json::<RegisterResponse>().await.unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, credentials: &Credentials) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(credentials)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.error);
        return Err(ApiError::Rejected { status, message });
    }
    Ok(resp)
}
