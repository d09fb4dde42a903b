use std::{fs, path::Path};

use anyhow::{Ok, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into the current directory.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))?;

    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        0,
        true,
    ))
}
