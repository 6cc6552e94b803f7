//! HTTP clients for mastoblock.
//!
//! - [`MastodonClient`] talks to the admin domain-block endpoints of a Mastodon
//!   instance and implements [`DomainBlockStore`](mastoblock_core::DomainBlockStore)
//! - [`FeedClient`] retrieves a JSON blocklist feed and implements
//!   [`FeedSource`](mastoblock_core::FeedSource)

#![doc(html_root_url = "https://docs.rs/mastoblock-client/0.3.0")]

mod client;
mod feed;
mod http;
pub mod api;

pub use client::{MastodonClient, MastodonClientBuilder};
pub use feed::FeedClient;
pub use http::DEFAULT_TIMEOUT;
pub use mastoblock_core::{Result, SyncError};
