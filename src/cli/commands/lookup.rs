use anyhow::{Ok, Result};
use log::info;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};

use crate::{
    config::load_config,
    core::{Catalog, bundled, parse_file},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let loaded = load_config(&cmd.common.path)?;
    let config = loaded.config;

    let (catalog, origin) = match &cmd.file {
        Some(file) => (
            Catalog::from_document(&parse_file(file)?, config.duplicate_policy),
            file.to_string_lossy().to_string(),
        ),
        None => (bundled::settings_de()?, bundled::SETTINGS_DE_PATH.to_string()),
    };

    let context = cmd.context.unwrap_or(config.default_context);
    let found = catalog.resolve(&context, &cmd.source, cmd.comment.as_deref(), cmd.count);
    let is_found = found.is_some();
    if !is_found {
        info!("no translation for {:?} in context {}", cmd.source, context);
    }
    let text = found.unwrap_or_else(|| match cmd.count {
        Some(n) => cmd.source.replace("%n", &n.to_string()),
        None => cmd.source.clone(),
    });

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            context,
            source: cmd.source,
            text,
            found: is_found,
            catalog: origin,
        }),
        Vec::new(),
        0,
        false,
    ))
}
