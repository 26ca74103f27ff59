//! Technology collection endpoints.

use reqwest::Method;

use super::parse;
use super::types::{ApiError, NewTechnology, Technology, TechnologyPatch};
use super::ApiClient;

impl ApiClient {
    /// List every technology on the radar.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn list_technologies(&self) -> Result<Vec<Technology>, ApiError> {
        let text = self.dispatch_authed(self.authed(Method::GET, "/technologies/")).await?;
        parse(&text)
    }

    /// Create a technology.
    ///
    /// # Errors
    ///
    /// Duplicate names surface as [`ApiError::Status`] with a 409; other
    /// failures map to the usual [`ApiError`] variants.
    pub async fn create_technology(&self, tech: &NewTechnology) -> Result<Technology, ApiError> {
        let req = self.authed(Method::POST, "/technologies/").json(tech);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Apply a partial update to a technology.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn update_technology(
        &self,
        id: &str,
        patch: &TechnologyPatch,
    ) -> Result<Technology, ApiError> {
        let req = self.authed(Method::PATCH, &format!("/technologies/{id}")).json(patch);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Delete a technology, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn delete_technology(&self, id: &str) -> Result<Technology, ApiError> {
        let req = self.authed(Method::DELETE, &format!("/technologies/{id}"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }
}
