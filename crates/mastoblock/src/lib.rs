//! Keep a Mastodon instance's domain blocks in sync with a JSON blocklist feed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mastoblock::{FeedClient, MastodonClient, SyncCycle, SyncJob};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> mastoblock::Result<()> {
//!     let feed = FeedClient::new("https://example.org/blocklist.json")?;
//!     let instance = MastodonClient::new("https://mastodon.example", "access-token")?;
//!
//!     // One pass
//!     let cycle = SyncCycle::new(Arc::new(feed), Arc::new(instance));
//!     let report = cycle.run().await?;
//!     println!("{report}");
//!
//!     // Or keep it running every five minutes
//!     let handle = SyncJob::new(cycle, Duration::from_secs(300))?.start();
//!     tokio::signal::ctrl_c().await.ok();
//!     handle.stop().await;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/mastoblock/0.3.0")]

// Re-export core types
pub use mastoblock_core::*;

// Re-export clients
pub use mastoblock_client::{
    api, FeedClient, MastodonClient, MastodonClientBuilder, DEFAULT_TIMEOUT,
};

// Re-export the cycle and scheduler
pub use mastoblock_sync::{SyncCycle, SyncJob, SyncJobHandle};

// Re-export runtime for convenience
pub use tokio;
pub use tokio_util::sync::CancellationToken;
