//! Wire types for the radar REST API.
//!
//! Field names and optionality mirror the backend's JSON exactly. Record ids
//! arrive under the Mongo-style `_id` key; timestamps are carried as the
//! ISO-8601 strings the server emits (offset-less, so not RFC 3339) and are
//! never parsed here.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or the response body could not be read.
    #[error("API request failed: {0}")]
    Request(String),

    /// The server rejected the bearer credential (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned a non-success status other than 401.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// AUTH
// =============================================================================

/// An authenticated user record as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub picture: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
}

/// Response of the Google credential exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to attach to subsequent requests.
    pub access_token: String,
    /// Always `"bearer"` in practice.
    pub token_type: String,
    /// The user the token was issued for.
    pub user: User,
}

// =============================================================================
// TECHNOLOGIES
// =============================================================================

/// A technology on the radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// One of the four quadrant labels, e.g. `"Tools"`.
    pub quadrant: String,
    /// One of the four ring labels, e.g. `"Adopt"`.
    pub ring: String,
    pub description: Option<String>,
    pub source: Option<String>,
    pub date_of_assessment: Option<String>,
    pub uri: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a technology. The server assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTechnology {
    pub name: String,
    pub quadrant: String,
    pub ring: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Partial update for a technology. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TechnologyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

// =============================================================================
// NEWS SOURCES
// =============================================================================

/// A monitored news source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Check interval in days (1..=365 server-side).
    pub cadence_days: u32,
    pub is_active: bool,
    pub last_checked: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a news source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNewsSource {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cadence_days: u32,
    pub is_active: bool,
}

/// Partial update for a news source. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewsSourcePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Generic `{"message": ...}` acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Acknowledgement of a manual source check, with the new check timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckedAck {
    pub message: String,
    pub last_checked: Option<String>,
}

// =============================================================================
// DISCOVERIES
// =============================================================================

/// A technology surfaced by the server-side discovery agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyDiscovery {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub news_source_id: String,
    pub discovered_at: String,
    pub article_title: Option<String>,
    pub article_url: Option<String>,
    /// Agent confidence in the detection, 0.0..=1.0.
    pub confidence_score: f64,
    pub category: Option<String>,
    /// One of `"discovered"`, `"assessed"`, `"ignored"`.
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for recording a discovery manually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDiscovery {
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub news_source_id: String,
    pub discovered_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_url: Option<String>,
    pub confidence_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Defaults to `"discovered"` server-side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Optional filters for listing discoveries, mapped onto query parameters.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilter {
    pub news_source_id: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub min_confidence: Option<f64>,
}

impl DiscoveryFilter {
    /// Render the set filters as query pairs, in a fixed order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &self.news_source_id {
            pairs.push(("news_source_id", id.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(min) = self.min_confidence {
            pairs.push(("min_confidence", min.to_string()));
        }
        pairs
    }
}

// =============================================================================
// AUTH API TRAIT
// =============================================================================

/// The two auth calls the session layer depends on. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a Google ID token for a bearer token and user record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the exchange is rejected or the response
    /// is malformed.
    async fn exchange_google(&self, id_token: &str) -> Result<LoginResponse, ApiError>;

    /// Fetch the user the current bearer token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the token is missing, expired
    /// or revoked, and other [`ApiError`] variants for transport failures.
    async fn fetch_current_user(&self) -> Result<User, ApiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
