use mastoblock_core::{
    reconcile, translate, CurrentState, DomainBlockStore, FeedSource, Result, SyncError, SyncReport,
};
use std::sync::Arc;
use tracing::{debug, info};

/// One reconciliation pass from the feed to the instance.
///
/// Holds no state between runs; everything is re-read each time.
#[derive(Clone)]
pub struct SyncCycle {
    feed: Arc<dyn FeedSource>,
    store: Arc<dyn DomainBlockStore>,
}

impl SyncCycle {
    pub fn new(feed: Arc<dyn FeedSource>, store: Arc<dyn DomainBlockStore>) -> Self {
        Self { feed, store }
    }

    /// Run the cycle.
    ///
    /// A feed failure aborts before the instance is touched. A failed mutation
    /// aborts the remaining mutations; earlier ones stay applied.
    pub async fn run(&self) -> Result<SyncReport> {
        debug!("Syncing data");

        let feed = self.feed.fetch().await.map_err(SyncError::feed)?;
        let rules = feed.sanitize();
        let desired = translate(&rules);
        debug!(rules = rules.len(), domains = desired.len(), "Sanitized blocklist feed");

        let current = CurrentState::fetch(self.store.as_ref()).await?;
        let report = reconcile(self.store.as_ref(), &desired, current).await?;

        info!(
            created = report.created,
            updated = report.updated,
            deleted = report.deleted,
            unchanged = report.unchanged,
            "Finished syncing data"
        );
        Ok(report)
    }
}
