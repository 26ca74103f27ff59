//! Technology discovery endpoints.
//!
//! Discoveries are produced server-side by an agent that reads the monitored
//! news sources; the client lists, triages and deletes them, and can kick
//! off a discovery run on demand.

use reqwest::Method;

use super::parse;
use super::types::{Ack, ApiError, DiscoveryFilter, NewDiscovery, TechnologyDiscovery};
use super::ApiClient;

impl ApiClient {
    /// List discoveries, optionally narrowed by [`DiscoveryFilter`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn list_discoveries(
        &self,
        filter: &DiscoveryFilter,
    ) -> Result<Vec<TechnologyDiscovery>, ApiError> {
        let req = self
            .authed(Method::GET, "/technology-discoveries/")
            .query(&filter.to_query());
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Fetch a single discovery.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_discovery(&self, id: &str) -> Result<TechnologyDiscovery, ApiError> {
        let req = self.authed(Method::GET, &format!("/technology-discoveries/{id}"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Record a discovery manually.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn create_discovery(
        &self,
        discovery: &NewDiscovery,
    ) -> Result<TechnologyDiscovery, ApiError> {
        let req = self.authed(Method::POST, "/technology-discoveries/").json(discovery);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Move a discovery through triage: `"discovered"`, `"assessed"` or
    /// `"ignored"`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails; unknown statuses are
    /// rejected by the server with a validation status.
    pub async fn update_discovery_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<TechnologyDiscovery, ApiError> {
        let req = self
            .authed(Method::PATCH, &format!("/technology-discoveries/{id}/status"))
            .query(&[("status", status)]);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Delete a discovery.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn delete_discovery(&self, id: &str) -> Result<Ack, ApiError> {
        let req = self.authed(Method::DELETE, &format!("/technology-discoveries/{id}"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Run the discovery agent, for one source or for all active sources.
    ///
    /// The response shape differs between the two modes (per-source counts
    /// versus a totals summary), so it is surfaced as raw JSON; callers
    /// re-list discoveries afterwards rather than interpreting it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the run cannot be started or its summary
    /// cannot be parsed.
    pub async fn run_discovery(
        &self,
        news_source_id: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut req = self.authed(Method::POST, "/technology-discoveries/run-discovery");
        if let Some(id) = news_source_id {
            req = req.query(&[("news_source_id", id)]);
        }
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }
}
