use anyhow::{Context, Ok, Result};
use serde::Serialize;

use super::super::args::DumpCommand;
use super::{CommandResult, CommandSummary, DumpSummary, helper::finish};

use crate::core::{TranslationEntry, TsDocument, bundled, parse_file};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DumpOutput<'a> {
    language: Option<&'a str>,
    source_language: Option<&'a str>,
    entry_count: usize,
    entries: Vec<&'a TranslationEntry>,
}

/// Render the messages of `document` as pretty JSON.
pub fn to_json(document: &TsDocument) -> Result<String> {
    let output = DumpOutput {
        language: document.language.as_deref(),
        source_language: document.source_language.as_deref(),
        entry_count: document.entry_count(),
        entries: document.entries().collect(),
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize entries")
}

pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let document = match &cmd.file {
        Some(file) => parse_file(file)?,
        None => bundled::settings_de_document()?,
    };
    let json = if cmd.json {
        Some(to_json(&document)?)
    } else {
        None
    };

    Ok(finish(
        CommandSummary::Dump(DumpSummary { document, json }),
        Vec::new(),
        0,
        false,
    ))
}
