use crate::{
    cli::ExitStatus,
    core::TsDocument,
    issues::Issue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Lookup,
    Fmt,
    Dump,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Lookup(LookupSummary),
    Fmt(FmtSummary),
    Dump(DumpSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Check(_) => CommandKind::Check,
            CommandSummary::Lookup(_) => CommandKind::Lookup,
            CommandSummary::Fmt(_) => CommandKind::Fmt,
            CommandSummary::Dump(_) => CommandKind::Dump,
            CommandSummary::Init(_) => CommandKind::Init,
        }
    }
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of TS files that were attempted, including unparsable ones.
    pub files_checked: usize,
    /// Files that failed to parse, whether or not `parse-error` is reported.
    pub unparsable: Vec<String>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub context: String,
    pub source: String,
    /// Translation, or the source itself on fallback.
    pub text: String,
    /// False when the catalog had no entry and `text` is the fallback.
    pub found: bool,
    /// Where the catalog came from, for verbose output.
    pub catalog: String,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files whose content differs from the canonical layout.
    pub changed: Vec<String>,
    pub file_count: usize,
    /// True for `--check` (nothing written).
    pub is_check: bool,
}

#[derive(Debug)]
pub struct DumpSummary {
    pub document: TsDocument,
    /// Rendered output for `--json`.
    pub json: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a tscat command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 is returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Issues found by `check` (and parse errors from `fmt`), sorted.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn kind(&self) -> CommandKind {
        self.summary.kind()
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_errors(self.error_count, self.exit_on_errors)
    }
}
