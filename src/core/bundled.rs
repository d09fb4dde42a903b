//! Catalogs compiled into the binary.

use anyhow::{Context, Result};

use super::{
    catalog::{Catalog, DuplicatePolicy},
    model::TsDocument,
    parser::parse_str,
};

/// Context name of the settings dialog strings.
pub const SETTINGS_CONTEXT: &str = "SettingsPage";

/// Display name used in diagnostics for the embedded German catalog.
pub const SETTINGS_DE_PATH: &str = "<bundled>/settings_de.ts";

/// German translations of the settings dialog, as produced by `lupdate`.
pub const SETTINGS_DE_TS: &str = include_str!("../../resources/settings_de.ts");

/// Parse the embedded German settings document.
pub fn settings_de_document() -> Result<TsDocument> {
    parse_str(SETTINGS_DE_TS, SETTINGS_DE_PATH).context("Bundled settings_de.ts is malformed")
}

/// Build the German settings catalog.
///
/// Every call parses the embedded document again and returns an independent
/// catalog; callers are expected to build it once and pass it around.
pub fn settings_de() -> Result<Catalog> {
    Ok(Catalog::from_document(
        &settings_de_document()?,
        DuplicatePolicy::First,
    ))
}
