//! Unfinished translation detection rule.

use crate::{
    core::{CheckContext, TranslationType, TsDocument},
    issues::UnfinishedIssue,
    rules::helpers::{site, sort_by_site},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> =
        ctx.documents.iter().flat_map(check_unfinished).collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

pub fn check_unfinished(document: &TsDocument) -> Vec<UnfinishedIssue> {
    document
        .entries()
        .filter(|entry| entry.kind == TranslationType::Unfinished)
        .map(|entry| UnfinishedIssue {
            site: site(document, entry),
        })
        .collect()
}
