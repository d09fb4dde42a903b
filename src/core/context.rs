//! Loading TS files for checks.
//!
//! Files are parsed in parallel; parse failures are kept as issues instead of
//! aborting the whole run.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glob::MatchOptions;
use log::{debug, info};
use rayon::prelude::*;

use crate::{
    config::Config,
    core::{Catalog, TsDocument, is_ts_document, parse_str},
    issues::ParseErrorIssue,
};

/// Parsed documents plus the files that failed to parse.
pub struct CheckContext {
    pub config: Config,
    pub documents: Vec<TsDocument>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Parse every file in `paths`. Unreadable files are errors, malformed
    /// files are recorded in `parse_errors`.
    pub fn load(config: Config, paths: &[PathBuf]) -> Result<Self> {
        let results: Vec<Result<Result<TsDocument, ParseErrorIssue>>> = paths
            .par_iter()
            .map(|path| {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read TS file: {:?}", path))?;
                let display = path.to_string_lossy();
                Ok(parse_str(&content, &display).map_err(ParseErrorIssue::from))
            })
            .collect();

        let mut documents = Vec::new();
        let mut parse_errors = Vec::new();
        for result in results {
            match result? {
                Ok(document) => documents.push(document),
                Err(issue) => {
                    debug!("failed to parse {}: {}", issue.file_path, issue.error);
                    parse_errors.push(issue);
                }
            }
        }
        info!(
            "loaded {} catalog file(s), {} failed to parse",
            documents.len(),
            parse_errors.len()
        );

        Ok(Self {
            config,
            documents,
            parse_errors,
        })
    }

    /// Use already parsed documents.
    pub fn from_documents(config: Config, documents: Vec<TsDocument>) -> Self {
        Self {
            config,
            documents,
            parse_errors: Vec::new(),
        }
    }

    /// Number of files that were attempted.
    pub fn file_count(&self) -> usize {
        self.documents.len() + self.parse_errors.len()
    }

    /// Merge all parsed documents into one catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog::from_documents(&self.documents, self.config.duplicate_policy)
    }
}

/// Expand the config's catalog globs relative to `root`, sorted.
///
/// Hidden directories are not searched, and matched files whose first
/// element is not `<TS>` (TypeScript sources) are skipped.
pub fn resolve_catalog_paths(config: &Config, root: &Path) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut paths = Vec::new();
    for pattern in &config.catalogs {
        let full = root.join(pattern);
        let full = full.to_string_lossy();
        for entry in glob::glob_with(&full, options)
            .with_context(|| format!("Invalid glob pattern in 'catalogs': \"{}\"", pattern))?
        {
            let path = entry.context("Failed to read catalog path")?;
            if path.is_file() && !paths.contains(&path) && is_catalog_file(&path) {
                paths.push(path);
            }
        }
    }
    paths.sort();
    Ok(paths)
}

/// Unreadable files count as catalogs so loading reports them.
fn is_catalog_file(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(content) if !is_ts_document(&content) => {
            debug!("skipping {:?}, not a TS document", path);
            false
        }
        _ => true,
    }
}
