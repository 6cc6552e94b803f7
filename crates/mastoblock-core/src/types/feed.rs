use super::de::{decodable_entries, null_as_default, string_entries};
use crate::{sanitize, translate, BlockRule, DomainBlock, Severity};
use serde::{Deserialize, Serialize};

/// A JSON blocklist feed as published by a third party.
///
/// ```json
/// {"domain_blocks": [{"domains": ["bad.example"], "severity": "suspend",
///   "reject_media": true, "reject_reports": false, "reason": "spam"}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistFeed {
    /// Block rules in declaration order; entries that fail to decode are dropped
    #[serde(default, deserialize_with = "decodable_entries")]
    pub domain_blocks: Vec<RawBlockRule>,
}

impl BlocklistFeed {
    /// Parse a feed from its JSON text
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sanitize the feed into canonical rules
    #[must_use]
    pub fn sanitize(self) -> Vec<BlockRule> {
        sanitize(self.domain_blocks)
    }

    /// Sanitize and flatten the feed into the desired per-domain state
    #[must_use]
    pub fn into_desired_blocks(self) -> Vec<DomainBlock> {
        translate(&self.sanitize())
    }
}

/// A block rule exactly as it appears in the feed; nothing about it is trusted yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlockRule {
    /// Domains sharing this rule
    #[serde(default, deserialize_with = "string_entries")]
    pub domains: Vec<String>,

    /// Requested severity
    #[serde(default)]
    pub severity: Severity,

    /// Reject media files from the domain
    #[serde(default, deserialize_with = "null_as_default")]
    pub reject_media: bool,

    /// Ignore reports originating from the domain
    #[serde(default, deserialize_with = "null_as_default")]
    pub reject_reports: bool,

    /// Free-text reason, published as the block's public comment
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}
