//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{Location, TranslationEntry};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    EmptyTranslation,
    UnexpectedContext,
    DuplicateSource,
    DuplicateLocation,
    Unfinished,
    PlaceMarker,
    EndingPunctuation,
    SurroundingWhitespace,
    ParseError,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::EmptyTranslation,
        Rule::UnexpectedContext,
        Rule::DuplicateSource,
        Rule::DuplicateLocation,
        Rule::Unfinished,
        Rule::PlaceMarker,
        Rule::EndingPunctuation,
        Rule::SurroundingWhitespace,
        Rule::ParseError,
    ];

    /// Parse a rule id as printed by `Display`.
    pub fn from_id(id: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.to_string() == id)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::UnexpectedContext => write!(f, "unexpected-context"),
            Rule::DuplicateSource => write!(f, "duplicate-source"),
            Rule::DuplicateLocation => write!(f, "duplicate-location"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::PlaceMarker => write!(f, "place-marker"),
            Rule::EndingPunctuation => write!(f, "ending-punctuation"),
            Rule::SurroundingWhitespace => write!(f, "surrounding-whitespace"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================
// Message Site
// ============================================================

/// Where a message lives in a TS file, plus the strings needed to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSite {
    /// Path to the TS file.
    pub file_path: String,
    /// Line of the `<message>` element (1-indexed).
    pub line: usize,
    pub context: String,
    pub source: String,
    /// Translation, or the numerus forms joined with `" | "`.
    pub translation: String,
}

impl MessageSite {
    pub fn new(file_path: impl Into<String>, entry: &TranslationEntry) -> Self {
        Self {
            file_path: file_path.into(),
            line: entry.line,
            context: entry.context.clone(),
            source: entry.source.clone(),
            translation: entry.display_translation(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Finished entry whose translation is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyTranslationIssue {
    pub site: MessageSite,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Context name not in the configured set of expected contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnexpectedContextIssue {
    pub site: MessageSite,
    pub expected: Vec<String>,
}

impl UnexpectedContextIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnexpectedContext
    }
}

/// Same (context, source, comment) defined more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateSourceIssue {
    /// The later definition.
    pub site: MessageSite,
    /// Line of the first definition.
    pub first_line: usize,
    /// Translation of the first definition, numerus forms joined like
    /// [`MessageSite::translation`].
    pub first_translation: String,
}

impl DuplicateSourceIssue {
    /// Conflicting translations are errors, exact repeats are warnings.
    pub fn severity(&self) -> Severity {
        if self.first_translation == self.site.translation {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub fn rule() -> Rule {
        Rule::DuplicateSource
    }
}

/// Different source strings claiming the same UI file line.
///
/// Usually stale provenance from the extraction tool. Both entries stay
/// distinct keys; this is only reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateLocationIssue {
    pub site: MessageSite,
    pub location: Location,
    /// Source string of the earlier message with the same location.
    pub other_source: String,
}

impl DuplicateLocationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateLocation
    }
}

/// Translation still marked `type="unfinished"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfinishedIssue {
    pub site: MessageSite,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// `%1`-style place markers differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceMarkerIssue {
    pub site: MessageSite,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceMarkerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceMarker
    }
}

/// Source and translation end with different punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndingPunctuationIssue {
    pub site: MessageSite,
    pub source_ending: Option<char>,
    pub translation_ending: Option<char>,
}

impl EndingPunctuationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EndingPunctuation
    }
}

/// Leading or trailing whitespace differs between source and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurroundingWhitespaceIssue {
    pub site: MessageSite,
}

impl SurroundingWhitespaceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SurroundingWhitespace
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

impl From<crate::core::ParseError> for ParseErrorIssue {
    fn from(err: crate::core::ParseError) -> Self {
        Self {
            file_path: err.file_path,
            line: err.line,
            column: err.column,
            error: err.message,
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Issue {
    EmptyTranslation(EmptyTranslationIssue),
    UnexpectedContext(UnexpectedContextIssue),
    DuplicateSource(DuplicateSourceIssue),
    DuplicateLocation(DuplicateLocationIssue),
    Unfinished(UnfinishedIssue),
    PlaceMarker(PlaceMarkerIssue),
    EndingPunctuation(EndingPunctuationIssue),
    SurroundingWhitespace(SurroundingWhitespaceIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(site) => &site.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a TS file.
    Message(&'a MessageSite),
    /// File-level position (parse errors).
    File {
        path: &'a str,
        line: usize,
        column: usize,
    },
}

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.site.context))
    }

    fn hint(&self) -> Option<String> {
        Some("remove the entry or mark it type=\"unfinished\" to fall back to the source".into())
    }
}

impl Report for UnexpectedContextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.context.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "expected one of: {}",
            self.expected.join(", ")
        ))
    }
}

impl Report for DuplicateSourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.severity() == Severity::Error {
            Some(format!(
                "first defined at line {} as (\"{}\"), here as (\"{}\")",
                self.first_line, self.first_translation, self.site.translation
            ))
        } else {
            Some(format!("first defined at line {}", self.first_line))
        }
    }
}

impl Report for DuplicateLocationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} is also claimed by \"{}\"",
            self.location, self.other_source
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for PlaceMarkerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("unexpected {}", self.extra.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for EndingPunctuationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.site.translation))
    }
}

impl Report for SurroundingWhitespaceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.site.translation))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
            column: self.column,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
