//! Turns untrusted feed rules into canonical [`BlockRule`]s.
//!
//! Rules:
//! - domains are trimmed and lower-cased; anything without a `.` is dropped
//! - a domain listed by several rules keeps only the rule declared last
//! - rules left without any domain are dropped
//! - severity is already normalized to [`Severity`](crate::Severity) at decode time
//!
//! Malformed entries are dropped silently; a partially usable feed is better
//! than none.

use crate::{BlockRule, RawBlockRule};
use std::collections::HashSet;

/// Normalize a single domain, returning `None` if it is not usable
#[must_use]
pub fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw.trim().to_lowercase();
    domain.contains('.').then_some(domain)
}

/// Sanitize feed rules.
///
/// Rules are processed from last to first, so the output is in reverse
/// declaration order. Only the per-domain content is meaningful downstream.
#[must_use]
pub fn sanitize(rules: Vec<RawBlockRule>) -> Vec<BlockRule> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut sanitized = Vec::with_capacity(rules.len());

    for rule in rules.into_iter().rev() {
        let mut domains = Vec::with_capacity(rule.domains.len());
        for raw in &rule.domains {
            let Some(domain) = normalize_domain(raw) else {
                continue;
            };
            if claimed.insert(domain.clone()) {
                domains.push(domain);
            }
        }

        if domains.is_empty() {
            continue;
        }

        sanitized.push(BlockRule {
            domains,
            severity: rule.severity,
            reject_media: rule.reject_media,
            reject_reports: rule.reject_reports,
            reason: rule.reason,
        });
    }

    sanitized
}
