use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Moderation strength applied to a blocked domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Hide the domain's content from public timelines
    Silence,
    /// Remove all content and relationships with the domain
    Suspend,
    /// No restriction beyond the reject flags
    #[default]
    None,
}

impl Severity {
    /// Lenient conversion used for feed and API input.
    ///
    /// Anything other than `silence` or `suspend` is treated as [`Severity::None`].
    /// Mastodon reports the no-op severity as `noop`, which also lands here.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "silence" => Self::Silence,
            "suspend" => Self::Suspend,
            _ => Self::None,
        }
    }

    /// Name used in the feed format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silence => "silence",
            Self::Suspend => "suspend",
            Self::None => "none",
        }
    }

    /// Value sent to the Mastodon admin API
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Silence => "silence",
            Self::Suspend => "suspend",
            Self::None => "noop",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Absent, null and unknown values all decode to `None`; the feed is third-party data.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map_or(Self::None, Self::parse_lenient))
    }
}
