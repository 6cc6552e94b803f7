//! Retrieval of the JSON blocklist feed.

use crate::http::{
    build_http, default_user_agent, json_response, normalize_base_url, transport_error,
    DEFAULT_TIMEOUT,
};
use async_trait::async_trait;
use mastoblock_core::{BlocklistFeed, FeedSource, Result};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

/// Fetches a blocklist feed from a fixed URL
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: HttpClient,
    url: String,
    timeout: Duration,
}

impl FeedClient {
    /// Create a feed client with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a feed client with a custom request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        normalize_base_url(&url)?;

        Ok(Self {
            http: build_http(timeout, &default_user_agent())?,
            url,
            timeout,
        })
    }

    /// URL the feed is fetched from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieve and decode the feed
    pub async fn fetch(&self) -> Result<BlocklistFeed> {
        debug!(url = %self.url, "Fetching blocklist feed");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.timeout))?;

        let feed: BlocklistFeed = json_response(response, self.timeout).await?;
        debug!(rules = feed.domain_blocks.len(), "Decoded blocklist feed");
        Ok(feed)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self) -> Result<BlocklistFeed> {
        Self::fetch(self).await
    }
}
