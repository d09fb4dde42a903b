//! Empty translation detection rule.
//!
//! A finished entry must carry text. An entry that is absent, or marked
//! unfinished, is how "not translated yet" is expressed; an empty finished
//! translation is a data bug.

use crate::{
    core::{CheckContext, TsDocument},
    issues::EmptyTranslationIssue,
    rules::helpers::{site, sort_by_site},
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    let mut issues: Vec<EmptyTranslationIssue> =
        ctx.documents.iter().flat_map(check_empty_translations).collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

/// Check one document for finished entries without text.
pub fn check_empty_translations(document: &TsDocument) -> Vec<EmptyTranslationIssue> {
    document
        .entries()
        .filter(|entry| entry.kind.is_finished() && !entry.has_translation())
        .map(|entry| EmptyTranslationIssue {
            site: site(document, entry),
        })
        .collect()
}
