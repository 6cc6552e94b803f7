use crate::{BlockRule, DomainBlock};

/// Flatten canonical rules into one [`DomainBlock`] per domain.
///
/// The rule's reason becomes the block's public comment.
#[must_use]
pub fn translate(rules: &[BlockRule]) -> Vec<DomainBlock> {
    rules
        .iter()
        .flat_map(|rule| {
            rule.domains.iter().map(move |domain| DomainBlock {
                domain: domain.clone(),
                severity: rule.severity,
                reject_media: rule.reject_media,
                reject_reports: rule.reject_reports,
                public_comment: rule.reason.clone(),
            })
        })
        .collect()
}
