//! Report formatting and printing utilities.
//!
//! Separate from core logic so that libscan can be used as a library
//! without printing side effects.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Shown when the tree declares no libraries at all.
pub const NO_LIBRARIES_MESSAGE: &str =
    "No libraries found (find_package, FetchContent, target_link_libraries).";

/// JSON document written by `scan --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    root: String,
    libraries: Vec<&'a str>,
    build_files: usize,
    skipped: usize,
}

/// Print a command result to stdout and stderr.
pub fn print(result: &CommandResult) -> Result<()> {
    report_to(result, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Print a command result to custom writers.
///
/// Results go to `out`; warnings and errors go to `err`.
pub fn report_to<W: Write, E: Write>(
    result: &CommandResult,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Scan(summary) => match summary.format {
            OutputFormat::Text => print_scan_text(summary, out, err)?,
            OutputFormat::Json => print_scan_json(summary, out)?,
        },
        CommandSummary::InvalidRoot(path) => {
            writeln!(
                err,
                "{} {} does not exist or is not a directory",
                "error:".bold().red(),
                path.display()
            )?;
        }
        CommandSummary::Init(summary) => print_init(summary, out, err)?,
    }
    Ok(())
}

fn print_scan_text<W: Write, E: Write>(
    summary: &ScanSummary,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let result = &summary.result;

    if result.libraries.is_empty() {
        writeln!(out, "{}", NO_LIBRARIES_MESSAGE)?;
    } else {
        writeln!(
            out,
            "{}",
            format!("Libraries used by {}:", summary.root.display()).bold()
        )?;
        for (i, library) in result.libraries.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, library)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} build {}, found {} {}",
            result.build_files,
            if result.build_files == 1 { "file" } else { "files" },
            result.libraries.len(),
            if result.libraries.len() == 1 {
                "library"
            } else {
                "libraries"
            }
        )
        .green()
    )?;

    print_scan_warnings(summary, err)
}

fn print_scan_json<W: Write>(summary: &ScanSummary, out: &mut W) -> Result<()> {
    let report = JsonReport {
        root: summary.root.to_string_lossy().to_string(),
        libraries: summary.result.libraries.iter().map(String::as_str).collect(),
        build_files: summary.result.build_files,
        skipped: summary.result.skipped_count,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn print_scan_warnings<E: Write>(summary: &ScanSummary, err: &mut E) -> Result<()> {
    let result = &summary.result;

    if result.build_files == 0 {
        writeln!(
            err,
            "{} No build files found under {}",
            "warning:".bold().yellow(),
            summary.root.display()
        )?;
    }

    if result.skipped_count > 0 {
        writeln!(
            err,
            "{} {} {} could not be read (use --verbose for details)",
            "warning:".bold().yellow(),
            result.skipped_count,
            if result.skipped_count == 1 {
                "path"
            } else {
                "paths"
            }
        )?;
    }

    Ok(())
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) -> Result<()> {
    if summary.created {
        writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )?;
    } else {
        writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME)?;
    }
    Ok(())
}
