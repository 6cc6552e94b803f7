//! Runtime configuration, validated from the command line and environment.

mod duration;

pub use duration::{format_duration, parse_duration, DurationError};

use crate::cli::args::Cli;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Startup configuration problems; all of them are fatal
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Missing { name: &'static str },

    #[error("invalid {name} '{value}': {source}")]
    InvalidDuration {
        name: &'static str,
        value: String,
        source: DurationError,
    },

    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
}

/// Validated service configuration.
#[derive(Clone)]
pub struct Config {
    /// Deployment environment name (`dev` or anything else)
    pub environment: String,

    /// Requested log level outside of `dev`
    pub log_level: String,

    /// Time between two sync cycles
    pub task_interval: Duration,

    /// URL of the JSON blocklist feed
    pub json_url: String,

    /// Base URL of the Mastodon instance
    pub mastodon_base_url: String,

    /// Admin access token
    pub mastodon_access_token: String,

    /// Timeout for each outbound request
    pub request_timeout: Duration,

    /// Run the first cycle right away
    pub run_at_start: bool,

    /// Run a single cycle and exit
    pub once: bool,
}

impl Config {
    /// Returns true when running in the development environment
    pub fn is_dev_env(&self) -> bool {
        self.environment.eq_ignore_ascii_case("dev")
    }

    /// The task interval in duration notation, for logs
    pub fn task_interval_display(&self) -> String {
        format_duration(self.task_interval)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("task_interval", &self.task_interval)
            .field("json_url", &self.json_url)
            .field("mastodon_base_url", &self.mastodon_base_url)
            .field("mastodon_access_token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("run_at_start", &self.run_at_start)
            .field("once", &self.once)
            .finish()
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            task_interval: positive_duration("TASK_INTERVAL", &cli.task_interval)?,
            request_timeout: positive_duration("REQUEST_TIMEOUT", &cli.request_timeout)?,
            json_url: required("JSON_URL", cli.json_url)?,
            mastodon_base_url: required("MASTODON_BASE_URL", cli.mastodon_base_url)?,
            mastodon_access_token: required("MASTODON_ACCESS_TOKEN", cli.mastodon_access_token)?,
            environment: cli.environment,
            log_level: cli.log_level,
            run_at_start: !cli.no_run_at_start,
            once: cli.once,
        })
    }
}

fn required(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Missing { name });
    }
    Ok(trimmed.to_string())
}

fn positive_duration(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let parsed = parse_duration(value).map_err(|source| ConfigError::InvalidDuration {
        name,
        value: value.to_string(),
        source,
    })?;

    if parsed.is_zero() {
        return Err(ConfigError::ZeroDuration { name });
    }
    Ok(parsed)
}
