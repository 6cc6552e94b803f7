//! Tracing subscriber setup.
//!
//! `dev` gets compact human-readable output on stderr at debug level.
//! Every other environment gets JSON lines at the configured level.
//! `RUST_LOG` overrides the level in both cases.

use crate::config::Config;
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolve the configured level, falling back to `info` when it is not valid.
///
/// Returns the level and whether the fallback was used.
pub fn resolve_level(config: &Config) -> (LevelFilter, bool) {
    if config.is_dev_env() {
        return (LevelFilter::DEBUG, false);
    }
    LevelFilter::from_str(config.log_level.trim())
        .map_or((LevelFilter::INFO, true), |level| (level, false))
}

/// Install the global subscriber. Call once at startup.
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (level, fell_back) = resolve_level(config);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string()))?;

    if config.is_dev_env() {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init()?;

        warn!("The service was started in development mode. Please change the 'ENVIRONMENT' variable to 'prod' in production!");
    } else {
        let fmt_layer = fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false);

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init()?;
    }

    if fell_back {
        warn!(
            log_level = %config.log_level,
            "An invalid log level was provided. Using the 'info' fallback value."
        );
    }

    Ok(())
}
