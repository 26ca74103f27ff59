//! News source collection endpoints.

use reqwest::Method;

use super::parse;
use super::types::{Ack, ApiError, CheckedAck, NewNewsSource, NewsSource, NewsSourcePatch};
use super::ApiClient;

impl ApiClient {
    /// List every monitored news source.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn list_news_sources(&self) -> Result<Vec<NewsSource>, ApiError> {
        let text = self.dispatch_authed(self.authed(Method::GET, "/news-sources/")).await?;
        parse(&text)
    }

    /// Register a news source for monitoring.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails; the server rejects
    /// cadences outside 1..=365 days with a validation status.
    pub async fn create_news_source(&self, source: &NewNewsSource) -> Result<NewsSource, ApiError> {
        let req = self.authed(Method::POST, "/news-sources/").json(source);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Fetch a single news source.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_news_source(&self, id: &str) -> Result<NewsSource, ApiError> {
        let req = self.authed(Method::GET, &format!("/news-sources/{id}"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Apply a partial update to a news source.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn update_news_source(
        &self,
        id: &str,
        patch: &NewsSourcePatch,
    ) -> Result<NewsSource, ApiError> {
        let req = self.authed(Method::PATCH, &format!("/news-sources/{id}")).json(patch);
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Delete a news source.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn delete_news_source(&self, id: &str) -> Result<Ack, ApiError> {
        let req = self.authed(Method::DELETE, &format!("/news-sources/{id}"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// Stamp a source as just checked, resetting its cadence clock.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn mark_source_checked(&self, id: &str) -> Result<CheckedAck, ApiError> {
        let req = self.authed(Method::POST, &format!("/news-sources/{id}/check"));
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }

    /// List sources whose cadence says they are due for a check.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn sources_due_for_checking(&self) -> Result<Vec<NewsSource>, ApiError> {
        let req = self.authed(Method::GET, "/news-sources/due/checking");
        let text = self.dispatch_authed(req).await?;
        parse(&text)
    }
}
