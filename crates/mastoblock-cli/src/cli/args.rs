//! Command-line argument definitions using clap.

use clap::Parser;

/// Keep a Mastodon instance's domain blocks in sync with a JSON blocklist.
///
/// Every option can also be provided through the environment variable shown
/// next to it.
#[derive(Parser)]
#[command(name = "mastoblock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Deployment environment; `dev` enables readable debug output
    #[arg(long, env = "ENVIRONMENT", default_value = "dev")]
    pub environment: String,

    /// Log level outside of `dev` (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Time between two sync cycles (e.g. 5m, 1h30m, 90s)
    #[arg(long, env = "TASK_INTERVAL", default_value = "5m")]
    pub task_interval: String,

    /// URL of the JSON blocklist feed
    #[arg(long, env = "JSON_URL")]
    pub json_url: String,

    /// Base URL of the Mastodon instance
    #[arg(long, env = "MASTODON_BASE_URL")]
    pub mastodon_base_url: String,

    /// Access token with the admin domain-block scopes
    #[arg(long, env = "MASTODON_ACCESS_TOKEN", hide_env_values = true)]
    pub mastodon_access_token: String,

    /// Timeout for each outbound HTTP request
    #[arg(long, env = "REQUEST_TIMEOUT", default_value = "30s")]
    pub request_timeout: String,

    /// Wait one interval before the first cycle
    #[arg(long, env = "NO_RUN_AT_START")]
    pub no_run_at_start: bool,

    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,
}
