//! Top-level client wiring.
//!
//! [`RadarClient`] builds the session core once and hands out the two
//! surfaces that share it: [`SessionStore`] for the auth lifecycle and
//! [`ApiClient`] for REST calls. Cloning the client is cheap, and every
//! clone observes the same session; a login or a 401 invalidation seen
//! through one handle is visible through all of them.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::api::types::ApiError;
use crate::config::ClientConfig;
use crate::session::{SessionInner, SessionStore};
use crate::token_store::{FileTokenStore, TokenStore};

/// Facade over the session and API layers.
#[derive(Clone)]
pub struct RadarClient {
    session: SessionStore,
    api: ApiClient,
}

impl RadarClient {
    /// Build a client that persists its bearer token at `config.token_path`.
    ///
    /// Any previously persisted token is loaded eagerly and the session
    /// starts out `Validating`; call [`SessionStore::validate`] before
    /// trusting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let store = FileTokenStore::new(config.token_path.clone());
        Self::with_token_store(config, Box::new(store))
    }

    /// Build a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables and their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env())
    }

    /// Build a client around a caller-supplied token store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_token_store(
        config: &ClientConfig,
        store: Box<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        let inner = Arc::new(SessionInner::new(store));
        let api = ApiClient::new(config, Arc::clone(&inner))?;
        let session = SessionStore::new(inner, Arc::new(api.clone()));
        Ok(Self { session, api })
    }

    /// Session handle: login, logout, validation, state subscriptions.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// API handle: technologies, news sources, discoveries.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
