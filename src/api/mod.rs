//! REST client for the radar backend.
//!
//! One `reqwest` client shared by every collection. Authenticated requests
//! attach the session's bearer token when present; any 401 coming back drops
//! the session globally, matching the server's token-expiry behavior.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::ClientConfig;
use crate::session::SessionInner;

pub mod types;

mod discoveries;
mod news_sources;
mod technologies;

use self::types::{ApiError, AuthApi, LoginResponse, User};

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client for the radar backend. Cheap to clone; clones share the
/// connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionInner>,
}

impl ApiClient {
    /// Build a client from config, sharing the given session core.
    pub(crate) fn new(config: &ClientConfig, session: Arc<SessionInner>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), session })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder with the current bearer token attached when present.
    fn authed(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.http.request(method, self.endpoint_url(path));
        match self.session.bearer_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn unauthed(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.endpoint_url(path))
    }

    /// Send an authenticated request. A 401 drops the whole session before
    /// surfacing as [`ApiError::Unauthorized`], no matter which endpoint
    /// produced it.
    async fn dispatch_authed(&self, req: reqwest::RequestBuilder) -> Result<String, ApiError> {
        match send(req).await {
            Err(ApiError::Unauthorized) => {
                warn!("api: unauthorized response, dropping session");
                self.session.invalidate();
                Err(ApiError::Unauthorized)
            }
            other => other,
        }
    }
}

// =============================================================================
// SEND / PARSE HELPERS
// =============================================================================

async fn send(req: reqwest::RequestBuilder) -> Result<String, ApiError> {
    let response = req.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
    body_or_error(status, text)
}

/// Pass a success body through, or map the status onto the error it means.
fn body_or_error(status: u16, body: String) -> Result<String, ApiError> {
    match status {
        200..=299 => Ok(body),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Status { status, body }),
    }
}

fn parse<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

// =============================================================================
// AUTH ENDPOINTS
// =============================================================================

#[derive(Serialize)]
struct GoogleAuthRequest<'a> {
    token: &'a str,
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn exchange_google(&self, id_token: &str) -> Result<LoginResponse, ApiError> {
        // The exchange authenticates a fresh Google credential, not the
        // stored bearer, so a 401 here must not drop the current session.
        let req = self
            .unauthed(Method::POST, "/auth/google")
            .json(&GoogleAuthRequest { token: id_token });
        let text = send(req).await?;
        parse(&text)
    }

    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        let text = self.dispatch_authed(self.authed(Method::GET, "/auth/me")).await?;
        parse(&text)
    }
}
