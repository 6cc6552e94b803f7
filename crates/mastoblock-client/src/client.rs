//! Mastodon admin API client.

use crate::api::DomainBlocksApi;
use crate::http::{
    build_http, default_user_agent, empty_response, json_response, next_page_query,
    normalize_base_url, transport_error, DEFAULT_TIMEOUT,
};
use mastoblock_core::Result;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Client for the admin endpoints of a Mastodon instance
#[derive(Clone)]
pub struct MastodonClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for MastodonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MastodonClient")
            .field("base_url", &self.inner.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl MastodonClient {
    /// Create a client for the instance at `base_url` using default settings
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        MastodonClientBuilder::new(base_url, access_token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> MastodonClientBuilder {
        MastodonClientBuilder::new(base_url, access_token)
    }

    /// Base URL of the instance, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access the admin domain-block endpoints
    #[must_use]
    pub fn domain_blocks(&self) -> DomainBlocksApi<'_> {
        DomainBlocksApi::new(self)
    }

    /// Perform an authenticated GET request for one page of a collection.
    ///
    /// Returns the decoded page and the query string of the `rel="next"` page, if any.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<(T, Option<String>)> {
        let url = self.build_url(path_and_query);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .bearer_auth(&self.inner.access_token)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.inner.timeout))?;

        let next = next_page_query(response.headers());
        let page = json_response(response, self.inner.timeout).await?;
        Ok((page, next))
    }

    /// Perform an authenticated POST request with form data
    pub(crate) async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "POST form request");

        let response = self
            .inner
            .http
            .post(&url)
            .bearer_auth(&self.inner.access_token)
            .form(params)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.inner.timeout))?;

        empty_response(response).await
    }

    /// Perform an authenticated PUT request with form data
    pub(crate) async fn put_form(&self, path: &str, params: &[(&str, &str)]) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "PUT form request");

        let response = self
            .inner
            .http
            .put(&url)
            .bearer_auth(&self.inner.access_token)
            .form(params)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.inner.timeout))?;

        empty_response(response).await
    }

    /// Perform an authenticated DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .bearer_auth(&self.inner.access_token)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.inner.timeout))?;

        empty_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }
}

/// Builder for configuring a [`MastodonClient`]
pub struct MastodonClientBuilder {
    base_url: String,
    access_token: String,
    timeout: Duration,
    user_agent: String,
}

impl MastodonClientBuilder {
    /// Create a new builder for the given instance and access token
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client, validating the base URL
    pub fn build(self) -> Result<MastodonClient> {
        let base_url = normalize_base_url(&self.base_url)?;
        let http = build_http(self.timeout, &self.user_agent)?;

        Ok(MastodonClient {
            inner: Arc::new(ClientInner {
                http,
                access_token: self.access_token,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}
