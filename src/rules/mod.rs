//! Rule implementations for tscat.
//!
//! Each rule is a pure function over parsed documents returning a specific
//! issue type. The `check_*_issues` entry points take a [`CheckContext`] and
//! return issues sorted by file and line.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared iteration and sorting helpers
//! - `empty`: Finished entries without text
//! - `unexpected_context`: Context names outside the configured set
//! - `duplicates`: Repeated keys and repeated provenance lines
//! - `unfinished`: Entries still marked unfinished
//! - `validation`: Place markers, ending punctuation, surrounding whitespace
//!
//! [`CheckContext`]: crate::core::CheckContext

pub mod duplicates;
pub mod empty;
pub mod helpers;
pub mod unexpected_context;
pub mod unfinished;
pub mod validation;

use crate::{core::CheckContext, issues::Issue, issues::Rule};

/// Run `rules` over every loaded document and collect the issues.
///
/// Rules listed in the config's `ignoreRules` are skipped. Parse failures are
/// reported as `parse-error` issues unless that rule is ignored.
pub fn run_checks(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    for &rule in rules {
        if !ctx.config.is_rule_enabled(rule) {
            continue;
        }
        match rule {
            Rule::EmptyTranslation => {
                let found = empty::check_empty_translation_issues(ctx);
                issues.extend(found.into_iter().map(Issue::EmptyTranslation));
            }
            Rule::UnexpectedContext => {
                let found = unexpected_context::check_unexpected_context_issues(ctx);
                issues.extend(found.into_iter().map(Issue::UnexpectedContext));
            }
            Rule::DuplicateSource => {
                let found = duplicates::check_duplicate_source_issues(ctx);
                issues.extend(found.into_iter().map(Issue::DuplicateSource));
            }
            Rule::DuplicateLocation => {
                let found = duplicates::check_duplicate_location_issues(ctx);
                issues.extend(found.into_iter().map(Issue::DuplicateLocation));
            }
            Rule::Unfinished => {
                let found = unfinished::check_unfinished_issues(ctx);
                issues.extend(found.into_iter().map(Issue::Unfinished));
            }
            Rule::PlaceMarker => {
                let found = validation::check_place_marker_issues(ctx);
                issues.extend(found.into_iter().map(Issue::PlaceMarker));
            }
            Rule::EndingPunctuation => {
                let found = validation::check_ending_punctuation_issues(ctx);
                issues.extend(found.into_iter().map(Issue::EndingPunctuation));
            }
            Rule::SurroundingWhitespace => {
                let found = validation::check_surrounding_whitespace_issues(ctx);
                issues.extend(found.into_iter().map(Issue::SurroundingWhitespace));
            }
            Rule::ParseError => {}
        }
    }

    if ctx.config.is_rule_enabled(Rule::ParseError) {
        issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));
    }

    issues
}
