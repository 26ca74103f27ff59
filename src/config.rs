//! Client configuration parsed from environment variables.

use std::path::PathBuf;

/// Default API base URL used by local development setups.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Typed configuration for [`crate::client::RadarClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the radar API, without trailing slash.
    pub base_url: String,
    pub timeouts: HttpTimeouts,
    /// Where the bearer token is persisted between runs.
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Build a config for the given base URL with default timeouts and token path.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeouts: HttpTimeouts::default(),
            token_path: default_token_path(),
        }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `RADAR_API_BASE_URL`: default `http://localhost:8000/api/v1`
    /// - `RADAR_REQUEST_TIMEOUT_SECS`: default 30
    /// - `RADAR_CONNECT_TIMEOUT_SECS`: default 10
    /// - `RADAR_TOKEN_PATH`: default `<platform data dir>/techradar/token`
    ///
    /// Unset or unparseable values fall back to their defaults; this never
    /// fails.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("RADAR_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("RADAR_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("RADAR_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let token_path = std::env::var("RADAR_TOKEN_PATH").map_or_else(|_| default_token_path(), PathBuf::from);

        Self { base_url, timeouts, token_path }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Platform-local path for the persisted token, e.g.
/// `~/.local/share/techradar/token` on Linux. Falls back to a dotted
/// directory under the working directory when no platform dir exists.
#[must_use]
pub fn default_token_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(".techradar").join("token"),
        |dir| dir.join("techradar").join("token"),
    )
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
