use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one successful reconciliation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Domain blocks created on the instance
    pub created: usize,
    /// Domain blocks whose settings were changed
    pub updated: usize,
    /// Domain blocks removed because the feed no longer lists them
    pub deleted: usize,
    /// Domain blocks that already matched the feed
    pub unchanged: usize,
}

impl SyncReport {
    /// Total number of API mutations issued
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.created + self.updated + self.deleted
    }

    /// Returns true if the instance already matched the feed
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.mutations() == 0
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} deleted, {} unchanged",
            self.created, self.updated, self.deleted, self.unchanged
        )
    }
}
