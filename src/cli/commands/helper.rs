use super::{CommandResult, CommandSummary};
use crate::cli::report::compare_issues;
use crate::issues::{Issue, Severity};

/// Sort issues and count them into a [`CommandResult`].
///
/// `extra_errors` are failures that are not issues, such as files that
/// `fmt --check` would rewrite.
pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    extra_errors: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count()
        + extra_errors;

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}
