use crate::{DomainBlockStore, RemoteDomainBlock, Result, SyncError};
use std::collections::HashMap;
use tracing::debug;

/// Current remote domain blocks, indexed by domain.
///
/// Used as a working set during reconciliation: matched domains are taken
/// out, and whatever remains is no longer desired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentState {
    blocks: HashMap<String, RemoteDomainBlock>,
}

impl CurrentState {
    /// Read the current blocks from the store.
    ///
    /// Failures are wrapped as [`SyncError::RemoteRead`]; without the current
    /// state the cycle cannot continue.
    pub async fn fetch(store: &dyn DomainBlockStore) -> Result<Self> {
        let blocks = store.list().await.map_err(SyncError::remote_read)?;
        debug!(count = blocks.len(), "Fetched current domain blocks");
        Ok(Self::from_blocks(blocks))
    }

    /// Index blocks by domain. A later block for the same domain replaces an earlier one.
    #[must_use]
    pub fn from_blocks(blocks: impl IntoIterator<Item = RemoteDomainBlock>) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .map(|block| (block.domain.clone(), block))
                .collect(),
        }
    }

    /// Look up the block for a domain
    #[must_use]
    pub fn get(&self, domain: &str) -> Option<&RemoteDomainBlock> {
        self.blocks.get(domain)
    }

    /// Remove and return the block for a domain, marking it as still desired
    pub fn take(&mut self, domain: &str) -> Option<RemoteDomainBlock> {
        self.blocks.remove(domain)
    }

    /// Number of blocks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Remaining blocks, sorted by domain
    #[must_use]
    pub fn into_remaining(self) -> Vec<RemoteDomainBlock> {
        let mut remaining: Vec<_> = self.blocks.into_values().collect();
        remaining.sort_by(|a, b| a.domain.cmp(&b.domain));
        remaining
    }
}

impl FromIterator<RemoteDomainBlock> for CurrentState {
    fn from_iter<I: IntoIterator<Item = RemoteDomainBlock>>(iter: I) -> Self {
        Self::from_blocks(iter)
    }
}
