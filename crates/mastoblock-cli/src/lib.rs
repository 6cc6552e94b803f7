//! # mastoblock-cli
//!
//! Long-running service that periodically pulls a JSON domain blocklist and
//! reconciles it against the admin domain blocks of a Mastodon instance.
//!
//! ## Features
//!
//! - **Environment configuration**: every option can be set through an env var
//! - **Periodic sync**: one cycle at startup, then one per `TASK_INTERVAL`
//! - **One-shot mode**: `--once` runs a single cycle for cron or CI
//! - **Structured logs**: readable console output in `dev`, JSON lines otherwise

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::run;
