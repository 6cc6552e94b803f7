use std::time::Duration;
use thiserror::Error;

/// Result type alias for mastoblock operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while syncing a blocklist
#[derive(Error, Debug)]
pub enum SyncError {
    /// Authentication failed - invalid, missing or under-privileged access token
    #[error("authentication failed ({code}): {message}; check the access token and its admin scopes")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        code: u16,
        /// Response body text, or the `error` field of a JSON body
        message: String,
    },

    /// API returned a non-2xx response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Response body text, or the `error` field of a JSON body
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The blocklist feed could not be retrieved or decoded
    #[error("could not retrieve blocklist feed: {0}")]
    Feed(#[source] Box<SyncError>),

    /// The current domain blocks could not be read from the instance
    #[error("could not read current domain blocks: {0}")]
    RemoteRead(#[source] Box<SyncError>),

    /// A create/update/delete call failed; the rest of the cycle was skipped
    #[error("could not {operation} domain block for '{domain}': {source}")]
    Mutation {
        /// Operation that failed (`create`, `update` or `delete`)
        operation: &'static str,
        /// Domain the operation targeted
        domain: String,
        /// Underlying failure
        source: Box<SyncError>,
    },
}

impl SyncError {
    /// Wrap an error raised while retrieving the feed
    #[must_use]
    pub fn feed(err: Self) -> Self {
        Self::Feed(Box::new(err))
    }

    /// Wrap an error raised while listing the current domain blocks
    #[must_use]
    pub fn remote_read(err: Self) -> Self {
        Self::RemoteRead(Box::new(err))
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Unauthorized { .. } => true,
            Self::Feed(inner) | Self::RemoteRead(inner) => inner.is_auth_error(),
            Self::Mutation { source, .. } => source.is_auth_error(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if the error came from a response
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { code, .. } | Self::Api { code, .. } => Some(*code),
            Self::Feed(inner) | Self::RemoteRead(inner) => inner.status_code(),
            Self::Mutation { source, .. } => source.status_code(),
            _ => None,
        }
    }
}
