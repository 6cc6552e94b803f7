//! Core types and reconciliation logic for mastoblock.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: the JSON feed format, [`Severity`], flat [`DomainBlock`]s and
//!   the [`RemoteDomainBlock`]s stored by a Mastodon instance
//! - **Sanitizer**: [`sanitize`] turns untrusted feed rules into canonical [`BlockRule`]s
//! - **Translator**: [`translate`] flattens rules into one block per domain
//! - **Reconciler**: [`plan`], [`apply`] and [`reconcile`] diff desired against
//!   current state and drive a [`DomainBlockStore`]
//! - **Errors**: [`SyncError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mastoblock_core::{reconcile, BlocklistFeed, CurrentState, DomainBlockStore};
//!
//! async fn sync(feed: BlocklistFeed, store: &dyn DomainBlockStore) -> mastoblock_core::Result<()> {
//!     let desired = feed.into_desired_blocks();
//!     let current = CurrentState::fetch(store).await?;
//!     let report = reconcile(store, &desired, current).await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/mastoblock-core/0.3.0")]

mod error;
mod reconcile;
mod sanitize;
mod state;
mod store;
mod translate;
pub mod types;

pub use error::{Result, SyncError};
pub use reconcile::{apply, plan, reconcile, Mutation, Plan};
pub use sanitize::{normalize_domain, sanitize};
pub use state::CurrentState;
pub use store::{DomainBlockStore, FeedSource};
pub use translate::translate;
pub use types::*;
