use std::fmt;

use serde::Serialize;

/// Provenance of a message in the UI/source file it was extracted from.
///
/// Only used by translator tooling. Lookups never consult it, and the line
/// may be stale after the UI file was edited.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub filename: String,
    /// Line number (1-indexed). `None` when the `line` attribute is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => f.write_str(&self.filename),
        }
    }
}

/// State of a translation as recorded in the `type` attribute of
/// `<translation>`.
///
/// Only [`TranslationType::Finished`] entries are loaded into a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationType {
    /// No `type` attribute.
    #[default]
    Finished,
    Unfinished,
    /// Source string no longer exists in the UI (older lupdate).
    Obsolete,
    /// Source string no longer exists in the UI (lupdate 5.x and later).
    Vanished,
}

impl TranslationType {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            TranslationType::Finished => None,
            TranslationType::Unfinished => Some("unfinished"),
            TranslationType::Obsolete => Some("obsolete"),
            TranslationType::Vanished => Some("vanished"),
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationType::Unfinished),
            "obsolete" => Some(TranslationType::Obsolete),
            "vanished" => Some(TranslationType::Vanished),
            _ => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self == TranslationType::Finished
    }
}

/// A single `<message>` of a TS document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// Name of the enclosing `<context>`.
    pub context: String,
    /// Reference-language text. Whitespace is significant.
    pub source: String,
    pub locations: Vec<Location>,
    /// Localized text. Empty for numerus messages, see `numerus_forms`.
    pub translation: String,
    /// Disambiguation comment, part of the lookup key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    pub kind: TranslationType,
    /// Plural variants when the message was marked `numerus="yes"`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numerus_forms: Vec<String>,
    #[serde(skip)]
    pub numerus: bool,
    /// Line of the `<message>` element in the TS file (1-indexed), 0 for
    /// entries built in memory.
    #[serde(skip)]
    pub line: usize,
}

impl TranslationEntry {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, filename: impl Into<String>, line: usize) -> Self {
        self.locations.push(Location::new(filename, line));
        self
    }

    /// First recorded location, used for reporting.
    pub fn location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Translation as shown in reports: numerus forms are joined with `" | "`.
    pub fn display_translation(&self) -> String {
        if self.numerus {
            self.numerus_forms.join(" | ")
        } else {
            self.translation.clone()
        }
    }

    /// True if the entry carries something to display.
    pub fn has_translation(&self) -> bool {
        if self.numerus {
            self.numerus_forms.iter().any(|form| !form.is_empty())
        } else {
            !self.translation.is_empty()
        }
    }
}

/// A `<context>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TranslationEntry>,
}

impl TsContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A parsed TS document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsDocument {
    /// Path the document was read from, empty for in-memory documents.
    #[serde(skip)]
    pub file_path: String,
    /// Format version from the root element, e.g. `2.1`.
    pub version: Option<String>,
    /// Target language, e.g. `de_DE`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

impl TsDocument {
    /// All messages in document order.
    pub fn entries(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.contexts.iter().flat_map(|ctx| ctx.messages.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }

    pub fn context(&self, name: &str) -> Option<&TsContext> {
        self.contexts.iter().find(|ctx| ctx.name == name)
    }
}
