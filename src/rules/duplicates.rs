//! Duplicate detection rules.
//!
//! - `duplicate-source`: the same (context, source, comment) key is defined
//!   more than once in a file. Only one definition can win at lookup time.
//! - `duplicate-location`: different source strings cite the same UI file
//!   line. This is stale provenance, not aliasing: both keys stay distinct.

use std::collections::HashMap;

use crate::{
    core::{CheckContext, Location, TsDocument},
    issues::{DuplicateLocationIssue, DuplicateSourceIssue},
    rules::helpers::{live_entries, site, sort_by_site},
};

pub fn check_duplicate_source_issues(ctx: &CheckContext) -> Vec<DuplicateSourceIssue> {
    let mut issues: Vec<DuplicateSourceIssue> =
        ctx.documents.iter().flat_map(check_duplicate_sources).collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

pub fn check_duplicate_location_issues(ctx: &CheckContext) -> Vec<DuplicateLocationIssue> {
    let mut issues: Vec<DuplicateLocationIssue> = ctx
        .documents
        .iter()
        .flat_map(check_duplicate_locations)
        .collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

/// Report every definition after the first of a repeated key.
pub fn check_duplicate_sources(document: &TsDocument) -> Vec<DuplicateSourceIssue> {
    // (context, source, comment) -> (line, translation) of the first definition
    let mut seen: HashMap<(&str, &str, &str), (usize, String)> = HashMap::new();
    let mut issues = Vec::new();

    for entry in live_entries(document) {
        let key = (
            entry.context.as_str(),
            entry.source.as_str(),
            entry.comment.as_deref().unwrap_or_default(),
        );
        match seen.get(&key) {
            Some((first_line, first_translation)) => issues.push(DuplicateSourceIssue {
                site: site(document, entry),
                first_line: *first_line,
                first_translation: first_translation.clone(),
            }),
            None => {
                seen.insert(key, (entry.line, entry.display_translation()));
            }
        }
    }

    issues
}

/// Report messages whose location was already claimed by another source.
pub fn check_duplicate_locations(document: &TsDocument) -> Vec<DuplicateLocationIssue> {
    let mut claimed: HashMap<&Location, &str> = HashMap::new();
    let mut issues = Vec::new();

    for entry in live_entries(document) {
        for location in entry.locations.iter().filter(|l| l.line.is_some()) {
            match claimed.get(location) {
                Some(&other_source) if other_source != entry.source => {
                    issues.push(DuplicateLocationIssue {
                        site: site(document, entry),
                        location: location.clone(),
                        other_source: other_source.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    claimed.insert(location, entry.source.as_str());
                }
            }
        }
    }

    issues
}
