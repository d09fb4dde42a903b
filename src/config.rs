use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::DuplicatePolicy;
use crate::issues::Rule;

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns (relative to the config directory) of TS files to check.
    /// Hidden directories and TypeScript sources matching them are skipped.
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<String>,
    /// Allowed context names. Empty means any context is accepted.
    #[serde(default)]
    pub expected_contexts: Vec<String>,
    /// Context used by `lookup` when none is given.
    #[serde(default = "default_context")]
    pub default_context: String,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Rule ids that are never reported.
    #[serde(default)]
    pub ignore_rules: Vec<String>,
}

fn default_catalogs() -> Vec<String> {
    vec!["**/*_*.ts".to_string()]
}

fn default_context() -> String {
    "SettingsPage".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs: default_catalogs(),
            expected_contexts: Vec::new(),
            default_context: default_context(),
            duplicate_policy: DuplicatePolicy::default(),
            ignore_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the offending field for invalid glob patterns
    /// or unknown rule ids.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.catalogs {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'catalogs': \"{}\"", pattern))?;
        }

        for id in &self.ignore_rules {
            if Rule::from_id(id).is_none() {
                bail!("Unknown rule in 'ignoreRules': \"{}\"", id);
            }
        }

        if self.default_context.is_empty() {
            bail!("'defaultContext' must not be empty");
        }

        Ok(())
    }

    /// Whether issues of `rule` should be reported.
    pub fn is_rule_enabled(&self, rule: Rule) -> bool {
        let id = rule.to_string();
        !self.ignore_rules.iter().any(|ignored| *ignored == id)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for the config file, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the catalog globs are relative to.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            log::debug!("loaded config from {:?}", path);
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
