//! Diff desired against current state and apply the difference.
//!
//! Creates and updates follow the desired order; deletes come last, sorted by
//! domain. Mutations run one at a time and the first failure stops the run.
//! Nothing is rolled back: the next cycle re-reads the instance and picks up
//! whatever is still different.

use crate::{
    CurrentState, DomainBlock, DomainBlockStore, RemoteDomainBlock, Result, SyncError, SyncReport,
};
use std::collections::HashMap;
use tracing::info;

/// A single change to apply to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// No block exists for the domain yet
    Create(DomainBlock),
    /// A block exists but its settings differ
    Update {
        /// Identifier of the existing block
        id: String,
        /// New settings
        block: DomainBlock,
    },
    /// The block is no longer desired
    Delete(RemoteDomainBlock),
}

impl Mutation {
    /// Short operation name used in logs and errors
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Domain targeted by the mutation
    #[must_use]
    pub fn domain(&self) -> &str {
        match self {
            Self::Create(block) | Self::Update { block, .. } => &block.domain,
            Self::Delete(block) => &block.domain,
        }
    }
}

/// Ordered mutations plus the number of domains already in sync
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Mutations in the order they will be applied
    pub mutations: Vec<Mutation>,
    /// Desired domains that need no change
    pub unchanged: usize,
}

impl Plan {
    /// Returns true if nothing needs to change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

/// Compute the mutations turning `current` into `desired`.
///
/// `current` is consumed as a working set. If `desired` lists a domain more
/// than once, the last entry is used.
#[must_use]
pub fn plan(desired: &[DomainBlock], mut current: CurrentState) -> Plan {
    let last_index: HashMap<&str, usize> = desired
        .iter()
        .enumerate()
        .map(|(i, block)| (block.domain.as_str(), i))
        .collect();

    let mut plan = Plan::default();

    for (i, block) in desired.iter().enumerate() {
        if last_index.get(block.domain.as_str()) != Some(&i) {
            continue;
        }

        match current.take(&block.domain) {
            None => plan.mutations.push(Mutation::Create(block.clone())),
            Some(existing) if existing.differs_from(block) => plan.mutations.push(Mutation::Update {
                id: existing.id,
                block: block.clone(),
            }),
            Some(_) => plan.unchanged += 1,
        }
    }

    plan.mutations
        .extend(current.into_remaining().into_iter().map(Mutation::Delete));

    plan
}

/// Apply a plan against the store, stopping at the first failure
pub async fn apply(store: &dyn DomainBlockStore, plan: Plan) -> Result<SyncReport> {
    let mut report = SyncReport {
        unchanged: plan.unchanged,
        ..SyncReport::default()
    };

    for mutation in plan.mutations {
        let result = match &mutation {
            Mutation::Create(block) => {
                info!(domain = %block.domain, severity = %block.severity, "Creating domain block");
                store.create(block).await.map(|()| report.created += 1)
            }
            Mutation::Update { id, block } => {
                info!(domain = %block.domain, id = %id, severity = %block.severity, "Updating domain block");
                store.update(id, block).await.map(|()| report.updated += 1)
            }
            Mutation::Delete(block) => {
                info!(domain = %block.domain, id = %block.id, "Removing domain block");
                store.delete(&block.id).await.map(|()| report.deleted += 1)
            }
        };

        result.map_err(|source| SyncError::Mutation {
            operation: mutation.operation(),
            domain: mutation.domain().to_string(),
            source: Box::new(source),
        })?;
    }

    Ok(report)
}

/// Plan and apply in one step
pub async fn reconcile(
    store: &dyn DomainBlockStore,
    desired: &[DomainBlock],
    current: CurrentState,
) -> Result<SyncReport> {
    apply(store, plan(desired, current)).await
}
