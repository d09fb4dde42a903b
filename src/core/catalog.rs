//! Immutable translation catalog.
//!
//! # Invariants
//!
//! 1. **Only displayable entries are loaded**: unfinished, obsolete and
//!    vanished entries, and entries with an empty translation, are skipped.
//!    Their absence makes lookups fall back to the source text.
//!
//! 2. **Lookup never fails**: [`Catalog::translate`] returns the queried
//!    source string unchanged when no entry matches.
//!
//! 3. **Thread safety**: `Catalog` is `Send + Sync`; it is never mutated
//!    after construction. Build it once and pass it by reference.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Source not in context | Returns source text |
//! | Duplicate key | Same (context, source, comment) twice | Resolved by [`DuplicatePolicy`] |
//! | Missing numerus form | Fewer forms than the plural rule needs | Last form is used |

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::model::{TranslationEntry, TsDocument};

/// Which entry wins when a key is defined more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the first definition, ignore later ones.
    #[default]
    First,
    /// Later definitions replace earlier ones.
    Last,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::First => write!(f, "first"),
            DuplicatePolicy::Last => write!(f, "last"),
        }
    }
}

/// Lookup key: context, source text and optional disambiguation comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    context: String,
    source: String,
    comment: String,
}

impl Key {
    fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Simple(String),
    Numerus(Vec<String>),
}

/// Plural-form selection rule, mirroring the rules `lrelease` embeds per
/// language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PluralRule {
    /// A single form (Japanese, Chinese, Korean, ...).
    Single,
    /// `n == 1` uses form 0, everything else form 1 (German, English, ...).
    #[default]
    OneOther,
    /// `n <= 1` uses form 0 (French, Brazilian Portuguese).
    ZeroOneOther,
    /// Russian, Ukrainian and other East Slavic languages (3 forms).
    EastSlavic,
    /// Polish (3 forms).
    Polish,
}

impl PluralRule {
    /// Pick the rule for a TS language tag such as `de_DE` or `pt-BR`.
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_ascii_lowercase();
        let primary = normalized.split('_').next().unwrap_or_default();
        match primary {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" => PluralRule::Single,
            "fr" => PluralRule::ZeroOneOther,
            "pt" if normalized == "pt_br" => PluralRule::ZeroOneOther,
            "ru" | "uk" | "be" | "hr" | "sr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            _ => PluralRule::OneOther,
        }
    }

    /// Index of the numerus form to use for `n`.
    pub fn form_index(self, n: u64) -> usize {
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Central `(context, source) → translation` table for one language.
///
/// # Example
///
/// ```
/// use tscat::core::{Catalog, DuplicatePolicy, TranslationEntry, TsContext, TsDocument};
///
/// let mut context = TsContext::new("SettingsPage");
/// context
///     .messages
///     .push(TranslationEntry::new("SettingsPage", "Threads:", "Fäden:"));
/// let document = TsDocument {
///     contexts: vec![context],
///     ..Default::default()
/// };
///
/// let catalog = Catalog::from_document(&document, DuplicatePolicy::First);
/// assert_eq!(catalog.lookup("SettingsPage", "Threads:"), Some("Fäden:"));
/// assert_eq!(catalog.translate("SettingsPage", "Size:"), "Size:");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<String>,
    plural_rule: PluralRule,
    entries: HashMap<Key, Value>,
    /// Loaded keys in first-seen order, for listing.
    order: Vec<Key>,
}

impl Catalog {
    /// Create an empty catalog. Every lookup falls back.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: &TsDocument, policy: DuplicatePolicy) -> Self {
        Self::from_documents([document], policy)
    }

    /// Merge several documents, applying `policy` across files as well.
    ///
    /// The language (and plural rule) is taken from the first document that
    /// declares one.
    pub fn from_documents<'a>(
        documents: impl IntoIterator<Item = &'a TsDocument>,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut catalog = Catalog::new();
        for document in documents {
            if catalog.language.is_none()
                && let Some(language) = &document.language
            {
                catalog.plural_rule = PluralRule::for_language(language);
                catalog.language = Some(language.clone());
            }
            let mut skipped = 0;
            for entry in document.entries() {
                if !catalog.insert(entry, policy) {
                    skipped += 1;
                }
            }
            debug!(
                "loaded {} message(s) from {:?}, skipped {}",
                document.entry_count() - skipped,
                document.file_path,
                skipped
            );
        }
        catalog
    }

    /// Returns false if the entry was not loaded.
    fn insert(&mut self, entry: &TranslationEntry, policy: DuplicatePolicy) -> bool {
        if !entry.kind.is_finished() || !entry.has_translation() {
            return false;
        }

        let key = Key::new(&entry.context, &entry.source, entry.comment.as_deref());
        let value = if entry.numerus {
            Value::Numerus(entry.numerus_forms.clone())
        } else {
            Value::Simple(entry.translation.clone())
        };

        match self.entries.get_mut(&key) {
            Some(existing) => {
                if policy == DuplicatePolicy::First {
                    return false;
                }
                *existing = value;
            }
            None => {
                self.order.push(key.clone());
                self.entries.insert(key, value);
            }
        }
        true
    }

    /// Look up a translation without disambiguation comment.
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.lookup_disambiguated(context, source, None)
    }

    /// Look up a translation for a source with a disambiguation comment.
    pub fn lookup_disambiguated(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&str> {
        match self.entries.get(&Key::new(context, source, comment))? {
            Value::Simple(text) => Some(text),
            Value::Numerus(forms) => forms.first().map(String::as_str),
        }
    }

    /// Translate `source`, falling back to `source` itself when missing.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source).unwrap_or(source)
    }

    /// Translate a numerus message for count `n`, replacing `%n` with `n`.
    ///
    /// Falls back to the source text (with `%n` replaced) when missing.
    pub fn translate_plural(&self, context: &str, source: &str, n: u64) -> String {
        self.resolve(context, source, None, Some(n))
            .unwrap_or_else(|| source.replace("%n", &n.to_string()))
    }

    /// Lookup with an optional disambiguation comment and numerus count.
    ///
    /// With a count the plural form is chosen by the catalog's rule and `%n`
    /// is replaced. Returns `None` on a miss; callers decide on the fallback.
    pub fn resolve(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        count: Option<u64>,
    ) -> Option<String> {
        let text = match (self.entries.get(&Key::new(context, source, comment))?, count) {
            (Value::Numerus(forms), Some(n)) if !forms.is_empty() => {
                let index = self.plural_rule.form_index(n).min(forms.len() - 1);
                forms[index].as_str()
            }
            (Value::Numerus(forms), _) => forms.first()?.as_str(),
            (Value::Simple(text), _) => text.as_str(),
        };
        Some(match count {
            Some(n) => text.replace("%n", &n.to_string()),
            None => text.to_string(),
        })
    }

    /// Target language declared by the loaded documents.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    /// Number of loaded messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct context names in load order.
    pub fn contexts(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for key in &self.order {
            if !seen.contains(&key.context.as_str()) {
                seen.push(key.context.as_str());
            }
        }
        seen
    }

    /// Loaded `(context, source, translation)` triples in load order.
    ///
    /// Numerus messages report their first form.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.order.iter().filter_map(|key| {
            let text = match self.entries.get(key)? {
                Value::Simple(text) => text.as_str(),
                Value::Numerus(forms) => forms.first()?.as_str(),
            };
            Some((key.context.as_str(), key.source.as_str(), text))
        })
    }
}
