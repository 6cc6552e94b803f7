//! Reconciliation cycle and background scheduler.
//!
//! [`SyncCycle`] runs one fetch → sanitize → translate → read → reconcile pass.
//! [`SyncJob`] runs a cycle on a fixed interval until its handle is stopped.

#![doc(html_root_url = "https://docs.rs/mastoblock-sync/0.3.0")]

mod cycle;
mod job;

pub use cycle::SyncCycle;
pub use job::{SyncJob, SyncJobHandle};
