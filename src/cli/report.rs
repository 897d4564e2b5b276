//! Terminal output for command results.
//!
//! Kept apart from the commands so the library can be used without printing.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, SheetsSummary};
use crate::{config::CONFIG_FILE_NAME, core::SyncReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Fetch(report) => print_sync_report(report, verbose, writer),
        CommandSummary::Sheets(summary) => print_sheets(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_sync_report<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Fetched rows from {}",
        SUCCESS_MARK.green(),
        plural(report.worksheets, "worksheet")
    );

    for target in &report.targets {
        let mut line = format!(
            "{} Generated {} for the {} output",
            SUCCESS_MARK.green(),
            plural(target.written.len(), "file"),
            target.name.bold()
        );
        if target.skipped > 0 {
            line.push_str(&format!(" ({} empty skipped)", target.skipped).dimmed().to_string());
        }
        let _ = writeln!(writer, "{}", line);

        if verbose {
            for path in &target.written {
                let _ = writeln!(writer, "    {}", path.display());
            }
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Successfully generated {}!",
            plural(report.files_written(), "i18n file")
        )
        .green()
    );
}

fn print_sheets<W: Write>(summary: &SheetsSummary, writer: &mut W) {
    if summary.sheets.is_empty() {
        let _ = writeln!(writer, "{}", "No sheets found".yellow());
        return;
    }

    let _ = writeln!(writer, "{}", "Available sheets:".bold());
    for sheet in &summary.sheets {
        if sheet.included {
            let _ = writeln!(writer, "  {} {}", SUCCESS_MARK.green(), sheet.title);
        } else {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                FAILURE_MARK.red(),
                sheet.title,
                "(excluded)".dimmed()
            );
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
