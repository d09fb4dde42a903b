//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (empty translations, duplicates, markers, ...)
//! - `lookup`: Translate one source string, falling back to the source
//! - `fmt`: Rewrite TS files in the canonical `lupdate` layout
//! - `dump`: List the messages of a TS file
//! - `init`: Create a `.tscatrc.json` configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.common.verbose,
            Some(Command::Dump(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the config file search from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rules selectable with `check --rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptyTranslation,
    UnexpectedContext,
    DuplicateSource,
    DuplicateLocation,
    Unfinished,
    PlaceMarker,
    EndingPunctuation,
    SurroundingWhitespace,
}

impl CheckRule {
    pub fn rule(self) -> Rule {
        match self {
            CheckRule::EmptyTranslation => Rule::EmptyTranslation,
            CheckRule::UnexpectedContext => Rule::UnexpectedContext,
            CheckRule::DuplicateSource => Rule::DuplicateSource,
            CheckRule::DuplicateLocation => Rule::DuplicateLocation,
            CheckRule::Unfinished => Rule::Unfinished,
            CheckRule::PlaceMarker => Rule::PlaceMarker,
            CheckRule::EndingPunctuation => Rule::EndingPunctuation,
            CheckRule::SurroundingWhitespace => Rule::SurroundingWhitespace,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// TS files to check (default: the `catalogs` globs from the config)
    pub files: Vec<PathBuf>,

    /// Rules to run (default: all)
    /// Can be specified multiple times: --rules unfinished --rules place-marker
    #[arg(long, value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source string to translate
    pub source: String,

    /// TS file to look up in (default: the bundled German settings catalog)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Context name (default: `defaultContext` from the config)
    #[arg(long)]
    pub context: Option<String>,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for numerus messages; `%n` is replaced with it
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// TS files to rewrite
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only report files that would change (exit 1 if any)
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// TS file to list (default: the bundled German settings catalog)
    pub file: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check TS translation catalogs for problems
    Check(CheckCommand),
    /// Translate a source string (prints the source itself when untranslated)
    Lookup(LookupCommand),
    /// Rewrite TS files in canonical layout
    Fmt(FmtCommand),
    /// List the messages of a TS file
    Dump(DumpCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
