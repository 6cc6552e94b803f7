use super::de::null_as_default;
use crate::Severity;
use serde::{Deserialize, Serialize};

/// Canonical block rule produced by [`sanitize`](crate::sanitize).
///
/// Domains are trimmed, lower-cased, contain a `.` and are never shared with
/// another rule from the same sanitize pass. Only the sanitizer builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRule {
    pub(crate) domains: Vec<String>,
    pub(crate) severity: Severity,
    pub(crate) reject_media: bool,
    pub(crate) reject_reports: bool,
    pub(crate) reason: String,
}

impl BlockRule {
    /// Domains covered by this rule
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Severity applied to every domain of the rule
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether media from these domains is rejected
    #[must_use]
    pub const fn reject_media(&self) -> bool {
        self.reject_media
    }

    /// Whether reports from these domains are ignored
    #[must_use]
    pub const fn reject_reports(&self) -> bool {
        self.reject_reports
    }

    /// Reason text, published as the public comment
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<BlockRule> for crate::RawBlockRule {
    fn from(rule: BlockRule) -> Self {
        Self {
            domains: rule.domains,
            severity: rule.severity,
            reject_media: rule.reject_media,
            reject_reports: rule.reject_reports,
            reason: rule.reason,
        }
    }
}

/// Desired block for exactly one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBlock {
    /// Blocked domain; the identity key
    pub domain: String,

    /// Moderation severity
    pub severity: Severity,

    /// Reject media files from the domain
    #[serde(default)]
    pub reject_media: bool,

    /// Ignore reports from the domain
    #[serde(default)]
    pub reject_reports: bool,

    /// Publicly visible comment
    #[serde(default)]
    pub public_comment: String,
}

impl DomainBlock {
    /// Create a block with the given severity and no flags or comment
    #[must_use]
    pub fn new(domain: impl Into<String>, severity: Severity) -> Self {
        Self {
            domain: domain.into(),
            severity,
            reject_media: false,
            reject_reports: false,
            public_comment: String::new(),
        }
    }

    /// Set the reject-media flag
    #[must_use]
    pub const fn reject_media(mut self, reject: bool) -> Self {
        self.reject_media = reject;
        self
    }

    /// Set the reject-reports flag
    #[must_use]
    pub const fn reject_reports(mut self, reject: bool) -> Self {
        self.reject_reports = reject;
        self
    }

    /// Set the public comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.public_comment = comment.into();
        self
    }
}

/// Domain block as currently stored by the Mastodon instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDomainBlock {
    /// Instance-assigned identifier, used to address updates and deletes
    pub id: String,

    /// Blocked domain
    pub domain: String,

    /// Current severity (`noop` is read as [`Severity::None`])
    #[serde(default)]
    pub severity: Severity,

    /// Reject media files from the domain
    #[serde(default)]
    pub reject_media: bool,

    /// Ignore reports from the domain
    #[serde(default)]
    pub reject_reports: bool,

    /// Publicly visible comment
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_comment: String,
}

impl RemoteDomainBlock {
    /// Returns true if any mutable setting differs from the desired block.
    ///
    /// The domain is the join key and is not compared.
    #[must_use]
    pub fn differs_from(&self, desired: &DomainBlock) -> bool {
        self.severity != desired.severity
            || self.reject_media != desired.reject_media
            || self.reject_reports != desired.reject_reports
            || self.public_comment != desired.public_comment
    }

    /// The settings of this block as a desired block
    #[must_use]
    pub fn to_domain_block(&self) -> DomainBlock {
        DomainBlock {
            domain: self.domain.clone(),
            severity: self.severity,
            reject_media: self.reject_media,
            reject_reports: self.reject_reports,
            public_comment: self.public_comment.clone(),
        }
    }
}
