//! Phrase validation rules.
//!
//! The same checks Qt Linguist runs while a translator edits a message:
//!
//! - `place-marker`: `%1`, `%L2`, `%n` markers must survive translation.
//! - `ending-punctuation`: a trailing `.`, `:`, `?` etc. should be kept.
//! - `surrounding-whitespace`: leading/trailing spaces are usually layout
//!   and should match.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CheckContext, TranslationEntry, TsDocument},
    issues::{EndingPunctuationIssue, PlaceMarkerIssue, SurroundingWhitespaceIssue},
    rules::helpers::{live_entries, site, sort_by_site, translated_texts},
};

static PLACE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%L?(\d{1,2}|n)").unwrap());

const ENDING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '…'];

pub fn check_place_marker_issues(ctx: &CheckContext) -> Vec<PlaceMarkerIssue> {
    let mut issues: Vec<PlaceMarkerIssue> =
        ctx.documents.iter().flat_map(check_place_markers).collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

pub fn check_ending_punctuation_issues(ctx: &CheckContext) -> Vec<EndingPunctuationIssue> {
    let mut issues: Vec<EndingPunctuationIssue> = ctx
        .documents
        .iter()
        .flat_map(check_ending_punctuation)
        .collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

pub fn check_surrounding_whitespace_issues(ctx: &CheckContext) -> Vec<SurroundingWhitespaceIssue> {
    let mut issues: Vec<SurroundingWhitespaceIssue> = ctx
        .documents
        .iter()
        .flat_map(check_surrounding_whitespace)
        .collect();
    sort_by_site(&mut issues, |issue| &issue.site);
    issues
}

/// Compare place markers of source and each translated text.
///
/// Numerus forms may drop `%n` (a singular form often spells out "one"), so
/// `%n` is ignored for numerus messages.
pub fn check_place_markers(document: &TsDocument) -> Vec<PlaceMarkerIssue> {
    let mut issues = Vec::new();

    for entry in live_entries(document) {
        let source_markers = place_markers(&entry.source, entry.numerus);
        for text in translated_texts(entry) {
            let translation_markers = place_markers(text, entry.numerus);
            let missing = difference(&source_markers, &translation_markers);
            let extra = difference(&translation_markers, &source_markers);
            if !missing.is_empty() || !extra.is_empty() {
                issues.push(PlaceMarkerIssue {
                    site: site(document, entry),
                    missing,
                    extra,
                });
                break;
            }
        }
    }

    issues
}

pub fn check_ending_punctuation(document: &TsDocument) -> Vec<EndingPunctuationIssue> {
    simple_entries(document)
        .filter_map(|entry| {
            let source_ending = ending_punctuation(&entry.source);
            let translation_ending = ending_punctuation(&entry.translation);
            (source_ending != translation_ending).then(|| EndingPunctuationIssue {
                site: site(document, entry),
                source_ending,
                translation_ending,
            })
        })
        .collect()
}

pub fn check_surrounding_whitespace(document: &TsDocument) -> Vec<SurroundingWhitespaceIssue> {
    simple_entries(document)
        .filter(|entry| {
            surrounding_whitespace(&entry.source) != surrounding_whitespace(&entry.translation)
        })
        .map(|entry| SurroundingWhitespaceIssue {
            site: site(document, entry),
        })
        .collect()
}

/// Non-numerus entries with a translation.
fn simple_entries(document: &TsDocument) -> impl Iterator<Item = &TranslationEntry> {
    live_entries(document).filter(|entry| !entry.numerus && !entry.translation.is_empty())
}

/// Count of each marker in `text`.
fn place_markers(text: &str, ignore_numerus: bool) -> BTreeMap<String, usize> {
    let mut markers = BTreeMap::new();
    for capture in PLACE_MARKER.captures_iter(text) {
        if ignore_numerus && &capture[1] == "n" {
            continue;
        }
        *markers.entry(capture[0].to_string()).or_insert(0) += 1;
    }
    markers
}

/// Markers occurring more often in `a` than in `b`.
fn difference(a: &BTreeMap<String, usize>, b: &BTreeMap<String, usize>) -> Vec<String> {
    a.iter()
        .filter(|(marker, count)| b.get(*marker).copied().unwrap_or(0) < **count)
        .map(|(marker, _)| marker.clone())
        .collect()
}

fn ending_punctuation(text: &str) -> Option<char> {
    let trimmed = text.trim_end();
    if trimmed.ends_with("...") {
        return Some('…');
    }
    trimmed
        .chars()
        .last()
        .filter(|c| ENDING_PUNCTUATION.contains(c))
}

/// Leading and trailing whitespace of `text`.
fn surrounding_whitespace(text: &str) -> (&str, &str) {
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];
    (leading, trailing)
}
