//! Shared helpers for rule implementations.

use crate::{
    core::{TranslationEntry, TranslationType, TsDocument},
    issues::MessageSite,
};

/// Entries that are still part of the UI: finished and unfinished ones.
///
/// Obsolete and vanished messages are kept by lupdate for reuse only and are
/// never displayed.
pub fn live_entries(document: &TsDocument) -> impl Iterator<Item = &TranslationEntry> {
    document.entries().filter(|entry| {
        matches!(
            entry.kind,
            TranslationType::Finished | TranslationType::Unfinished
        )
    })
}

/// Texts a translator produced for an entry: the translation, or each
/// non-empty numerus form.
pub fn translated_texts(entry: &TranslationEntry) -> Vec<&str> {
    if entry.numerus {
        entry
            .numerus_forms
            .iter()
            .map(String::as_str)
            .filter(|form| !form.is_empty())
            .collect()
    } else if entry.translation.is_empty() {
        Vec::new()
    } else {
        vec![entry.translation.as_str()]
    }
}

pub fn site(document: &TsDocument, entry: &TranslationEntry) -> MessageSite {
    MessageSite::new(document.file_path.clone(), entry)
}

/// Sort by file path, then line, for deterministic output.
pub fn sort_by_site<T>(issues: &mut [T], site: impl Fn(&T) -> &MessageSite) {
    issues.sort_by(|a, b| {
        let (a, b) = (site(a), site(b));
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.source.cmp(&b.source))
    });
}
