use crate::{BlocklistFeed, DomainBlock, RemoteDomainBlock, Result};
use async_trait::async_trait;

/// Remote system holding the live domain blocks.
///
/// The Mastodon admin API is the production implementation; the reconciler
/// only ever talks to this trait.
#[async_trait]
pub trait DomainBlockStore: Send + Sync {
    /// List every domain block currently stored
    async fn list(&self) -> Result<Vec<RemoteDomainBlock>>;

    /// Create a block for `block.domain`
    async fn create(&self, block: &DomainBlock) -> Result<()>;

    /// Replace the settings of the block with the given id
    async fn update(&self, id: &str, block: &DomainBlock) -> Result<()>;

    /// Remove the block with the given id
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Source of the JSON blocklist feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve and decode the feed
    async fn fetch(&self) -> Result<BlocklistFeed>;
}
