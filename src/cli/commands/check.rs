use anyhow::{Ok, Result};
use log::debug;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};

use crate::{
    config::load_config,
    core::{CheckContext, resolve_catalog_paths},
    issues::Rule,
    rules::run_checks,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let loaded = load_config(&cmd.common.path)?;

    let paths = if cmd.files.is_empty() {
        resolve_catalog_paths(&loaded.config, &loaded.root)?
    } else {
        cmd.files.clone()
    };
    debug!("checking {} file(s)", paths.len());

    let rules: Vec<Rule> = if cmd.rules.is_empty() {
        Rule::ALL.to_vec()
    } else {
        cmd.rules.iter().map(|rule| rule.rule()).collect()
    };

    let ctx = CheckContext::load(loaded.config, &paths)?;
    let issues = run_checks(&ctx, &rules);

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            files_checked: ctx.file_count(),
            unparsable: ctx
                .parse_errors
                .iter()
                .map(|error| error.file_path.clone())
                .collect(),
        }),
        issues,
        0,
        true,
    ))
}
