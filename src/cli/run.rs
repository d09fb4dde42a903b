//! Dispatches a parsed command line to its command handler.
//!
//! `serve` never reaches this point; `main` starts the MCP server directly.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, dump::dump, fmt::fmt, init::init, lookup::lookup},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
