//! Unexpected context detection rule.
//!
//! When `expectedContexts` is configured, every context block must use one
//! of those names. Reported once per context block.

use crate::{
    core::{CheckContext, TsDocument},
    issues::{MessageSite, UnexpectedContextIssue},
    rules::helpers::sort_by_site,
};

pub fn check_unexpected_context_issues(ctx: &CheckContext) -> Vec<UnexpectedContextIssue> {
    let expected = &ctx.config.expected_contexts;
    let mut issues: Vec<UnexpectedContextIssue> = ctx
        .documents
        .iter()
        .flat_map(|document| check_unexpected_contexts(document, expected))
        .collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

/// Check context names of one document. An empty `expected` list accepts all.
pub fn check_unexpected_contexts(
    document: &TsDocument,
    expected: &[String],
) -> Vec<UnexpectedContextIssue> {
    if expected.is_empty() {
        return Vec::new();
    }

    document
        .contexts
        .iter()
        .filter(|context| !expected.contains(&context.name))
        .map(|context| {
            let first = context.messages.first();
            UnexpectedContextIssue {
                site: MessageSite {
                    file_path: document.file_path.clone(),
                    line: first.map(|entry| entry.line).unwrap_or(0),
                    context: context.name.clone(),
                    source: first.map(|entry| entry.source.clone()).unwrap_or_default(),
                    translation: first
                        .map(|entry| entry.display_translation())
                        .unwrap_or_default(),
                },
                expected: expected.to_vec(),
            }
        })
        .collect()
}
