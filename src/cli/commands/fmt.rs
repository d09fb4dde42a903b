use std::fs;

use anyhow::{Context, Result};
use log::debug;

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, helper::finish};

use crate::{
    core::{parse_str, writer},
    issues::{Issue, ParseErrorIssue},
};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let mut changed = Vec::new();
    let mut issues = Vec::new();

    for path in &cmd.files {
        let display = path.to_string_lossy().to_string();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read TS file: {:?}", path))?;

        let document = match parse_str(&content, &display) {
            Ok(document) => document,
            Err(err) => {
                issues.push(Issue::ParseError(ParseErrorIssue::from(err)));
                continue;
            }
        };

        let formatted = writer::to_string(&document);
        if formatted == content {
            debug!("{} is already formatted", display);
            continue;
        }

        if !cmd.check {
            fs::write(path, &formatted)
                .with_context(|| format!("Failed to write TS file: {:?}", path))?;
        }
        changed.push(display);
    }

    let extra_errors = if cmd.check { changed.len() } else { 0 };
    let file_count = cmd.files.len() - issues.len();
    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed,
            file_count,
            is_check: cmd.check,
        }),
        issues,
        extra_errors,
        true,
    ))
}
