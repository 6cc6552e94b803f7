//! Admin domain-block API endpoints.

use crate::MastodonClient;
use async_trait::async_trait;
use mastoblock_core::{DomainBlock, DomainBlockStore, RemoteDomainBlock, Result};
use tracing::debug;

/// Path of the admin domain-block collection
pub const DOMAIN_BLOCKS_PATH: &str = "/api/v1/admin/domain_blocks";

/// Page size requested when listing; the largest the API accepts
pub const LIST_PAGE_LIMIT: usize = 200;

/// Admin domain-block API endpoints
pub struct DomainBlocksApi<'a> {
    client: &'a MastodonClient,
}

impl<'a> DomainBlocksApi<'a> {
    pub(crate) const fn new(client: &'a MastodonClient) -> Self {
        Self { client }
    }

    /// List every domain block on the instance, following `Link` pagination
    pub async fn list(&self) -> Result<Vec<RemoteDomainBlock>> {
        let mut blocks = Vec::new();
        let mut query = format!("limit={LIST_PAGE_LIMIT}");

        loop {
            let (page, next): (Vec<RemoteDomainBlock>, _) = self
                .client
                .get_page(&format!("{DOMAIN_BLOCKS_PATH}?{query}"))
                .await?;
            let exhausted = page.is_empty();
            blocks.extend(page);

            match next {
                Some(next) if !exhausted && next != query => query = next,
                _ => break,
            }
        }

        debug!(count = blocks.len(), "Listed domain blocks");
        Ok(blocks)
    }

    /// Create a domain block
    pub async fn create(&self, block: &DomainBlock) -> Result<()> {
        let params = [
            ("domain", block.domain.as_str()),
            ("severity", block.severity.api_value()),
            ("reject_media", bool_str(block.reject_media)),
            ("reject_reports", bool_str(block.reject_reports)),
            ("public_comment", block.public_comment.as_str()),
        ];

        self.client.post_form(DOMAIN_BLOCKS_PATH, &params).await
    }

    /// Replace the settings of an existing domain block.
    ///
    /// The domain itself cannot be changed and is not sent.
    pub async fn update(&self, id: &str, block: &DomainBlock) -> Result<()> {
        let params = [
            ("severity", block.severity.api_value()),
            ("reject_media", bool_str(block.reject_media)),
            ("reject_reports", bool_str(block.reject_reports)),
            ("public_comment", block.public_comment.as_str()),
        ];

        self.client
            .put_form(&format!("{DOMAIN_BLOCKS_PATH}/{id}"), &params)
            .await
    }

    /// Delete a domain block
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("{DOMAIN_BLOCKS_PATH}/{id}"))
            .await
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[async_trait]
impl DomainBlockStore for MastodonClient {
    async fn list(&self) -> Result<Vec<RemoteDomainBlock>> {
        self.domain_blocks().list().await
    }

    async fn create(&self, block: &DomainBlock) -> Result<()> {
        self.domain_blocks().create(block).await
    }

    async fn update(&self, id: &str, block: &DomainBlock) -> Result<()> {
        self.domain_blocks().update(id, block).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.domain_blocks().delete(id).await
    }
}
