//! mastoblock - keep a Mastodon instance's domain blocks in sync with a JSON blocklist.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mastoblock_cli::run().await
}
