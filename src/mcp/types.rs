use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::TranslationEntry;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project; the config file is searched upward from here
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path of the project, used for config discovery
    pub project_root_path: String,
    /// Source string to translate. Whitespace is significant.
    pub source: String,
    /// Context name (default: `defaultContext` from the config)
    pub context: Option<String>,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for numerus messages
    pub count: Option<u64>,
    /// TS file relative to the project root (default: bundled German settings catalog)
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckCatalogParams {
    /// Absolute path of the project
    pub project_root_path: String,
    /// TS files relative to the project root (default: `catalogs` globs from the config)
    pub files: Option<Vec<String>>,
    /// Rule ids to run, e.g. "unfinished" (default: all)
    pub rules: Option<Vec<String>>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesParams {
    /// Absolute path of the project
    pub project_root_path: String,
    /// TS file relative to the project root (default: bundled German settings catalog)
    pub file_path: Option<String>,
    /// Only list messages of this context
    pub context: Option<String>,
    /// Maximum number of items to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub catalogs: Vec<String>,
    pub expected_contexts: Vec<String>,
    pub default_context: String,
    pub duplicate_policy: String,
    pub ignore_rules: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            catalogs: c.catalogs,
            expected_contexts: c.expected_contexts,
            default_context: c.default_context,
            duplicate_policy: c.duplicate_policy.to_string(),
            ignore_rules: c.ignore_rules,
        }
    }
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub context: String,
    pub source: String,
    /// Translation, or the source itself when `found` is false
    pub text: String,
    pub found: bool,
    pub catalog: String,
}

// ============================================================
// Check Types (check_catalog)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckCatalogResult {
    pub files_checked: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, site) = match issue.location() {
            ReportLocation::Message(site) => (site.file_path.clone(), site.line, Some(site)),
            ReportLocation::File { path, line, .. } => (path.to_string(), line, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path,
            line,
            context: site.map(|s| s.context.clone()),
            source: site.map(|s| s.source.clone()),
            translation: site.map(|s| s.translation.clone()),
            message: issue.message(),
            details: issue.details(),
        }
    }
}

// ============================================================
// Entry Types (list_entries)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResult {
    pub file_path: String,
    pub language: Option<String>,
    pub total_count: usize,
    pub items: Vec<EntryItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryItem {
    pub context: String,
    pub source: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numerus_forms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// finished, unfinished, obsolete or vanished
    pub kind: String,
    /// Line of the message in the TS file
    pub line: usize,
    /// `file:line` provenance entries
    pub locations: Vec<String>,
}

impl From<&TranslationEntry> for EntryItem {
    fn from(entry: &TranslationEntry) -> Self {
        Self {
            context: entry.context.clone(),
            source: entry.source.clone(),
            translation: entry.translation.clone(),
            numerus_forms: entry.numerus_forms.clone(),
            comment: entry.comment.clone(),
            kind: entry.kind.attribute().unwrap_or("finished").to_string(),
            line: entry.line,
            locations: entry.locations.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
