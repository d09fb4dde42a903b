//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept separate from the
//! commands so tscat can be used as a library without terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, DumpSummary, FmtSummary, InitSummary,
    LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{TranslationEntry, TsDocument};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} TS {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Order by file, then line, then column.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col) = location_position(&a_loc);
    let (b_path, b_line, b_col) = location_position(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
        .then_with(|| a.rule().cmp(&b.rule()))
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match &loc {
        ReportLocation::Message(site) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                site.file_path,
                site.line
            );
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}: {:?} {} {:?}",
                site.line.to_string().blue(),
                "|".blue(),
                site.context,
                site.source,
                "=>".dimmed(),
                site.translation,
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
        }
        ReportLocation::File { path, line, column } => {
            let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, column);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn location_position<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Message(site) => (site.file_path.as_str(), site.line, 0),
        ReportLocation::File { path, line, column } => (*path, *line, *column),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(site) => Some(site.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    let stderr = &mut io::stderr().lock();

    match &result.summary {
        CommandSummary::Check(summary) => print_check_to(summary, &result.issues, stdout, stderr),
        CommandSummary::Lookup(summary) => print_lookup_to(summary, verbose, stdout, stderr),
        CommandSummary::Fmt(summary) => {
            report_to(&result.issues, stdout);
            print_fmt_to(summary, stdout);
        }
        CommandSummary::Dump(summary) => print_dump_to(summary, stdout),
        CommandSummary::Init(summary) => print_init_to(summary, stdout),
    }
}

fn print_check_to<W: Write, E: Write>(
    summary: &CheckSummary,
    issues: &[Issue],
    writer: &mut W,
    notes: &mut E,
) {
    report_to(issues, writer);
    if issues.is_empty() {
        print_success_to(summary.files_checked, writer);
    }

    // Parse errors are normally reported as issues; only mention files that
    // were left out because `parse-error` is ignored.
    let reported = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseError(_)))
        .count();
    if summary.unparsable.len() > reported {
        let _ = writeln!(
            notes,
            "{} skipped {} file(s) that could not be parsed: {}",
            "warning:".bold().yellow(),
            summary.unparsable.len(),
            summary.unparsable.join(", ")
        );
    }
}

fn print_lookup_to<W: Write, E: Write>(
    summary: &LookupSummary,
    verbose: bool,
    writer: &mut W,
    notes: &mut E,
) {
    let _ = writeln!(writer, "{}", summary.text);

    if verbose && !summary.found {
        let _ = writeln!(
            notes,
            "{} no translation for {:?} in context {} ({}), printed the source",
            "note:".bold(),
            summary.source,
            summary.context,
            summary.catalog
        );
    }
}

fn print_fmt_to<W: Write>(summary: &FmtSummary, writer: &mut W) {
    for path in &summary.changed {
        let action = if summary.is_check {
            "Would reformat:"
        } else {
            "Reformatted:"
        };
        let _ = writeln!(writer, "{} {}", action.bold(), path);
    }

    let count = summary.changed.len();
    if summary.is_check && count > 0 {
        let _ = writeln!(
            writer,
            "{} {} of {} file(s) would be reformatted",
            FAILURE_MARK.red(),
            count,
            summary.file_count
        );
    } else if count > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Reformatted {} of {} file(s)", count, summary.file_count).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} file(s) already formatted", summary.file_count).green()
        );
    }
}

fn print_dump_to<W: Write>(summary: &DumpSummary, writer: &mut W) {
    match &summary.json {
        Some(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        None => print_table_to(&summary.document, writer),
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Print messages as an aligned table: line, context, source, translation.
pub fn print_table_to<W: Write>(document: &TsDocument, writer: &mut W) {
    let header = ["LINE", "CONTEXT", "SOURCE", "TRANSLATION"];
    let rows: Vec<[String; 4]> = document
        .entries()
        .map(|entry| {
            [
                entry.line.to_string(),
                entry.context.clone(),
                format!("{:?}", entry.source),
                display_translation(entry),
            ]
        })
        .collect();

    let mut widths = header.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let cells = [
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ];
        let _ = writeln!(writer, "{}", format_row(&cells, &widths));
    }
    let _ = writeln!(
        writer,
        "\n{} message(s) in {} context(s)",
        rows.len(),
        document.contexts.len()
    );
}

fn display_translation(entry: &TranslationEntry) -> String {
    let text = if entry.numerus {
        entry
            .numerus_forms
            .iter()
            .map(|form| format!("{:?}", form))
            .collect::<Vec<_>>()
            .join(" | ")
    } else {
        format!("{:?}", entry.translation)
    };
    match entry.kind.attribute() {
        Some(kind) => format!("{} ({})", text, kind),
        None => text,
    }
}

/// Left-align cells by display width; the last column is not padded.
fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = width - UnicodeWidthStr::width(*cell);
            line.push_str(&" ".repeat(padding + 2));
        }
    }
    line
}
