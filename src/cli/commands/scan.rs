use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::cli::{args::ScanCommand, exit_status::ExitStatus, prompt::prompt_root};
use crate::config::{load_config, validate_build_file_name};
use crate::core::{ScanOptions, scan as scan_tree};

/// Run the scan command.
///
/// Without a path argument the root is read from stdin, and the session
/// waits for Enter after printing the results.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let (root, interactive) = match &cmd.path {
        Some(path) => (path.clone(), false),
        None => (
            prompt_root(&mut io::stdin().lock(), &mut io::stdout().lock())?,
            true,
        ),
    };

    let mut result = scan_root(&root, &cmd)?;
    result.wait_for_exit = interactive && result.exit_status == ExitStatus::Success;
    Ok(result)
}

/// Scan an explicit project root, applying config file and CLI overrides.
pub fn scan_root(root: &Path, cmd: &ScanCommand) -> Result<CommandResult> {
    if !root.is_dir() {
        return Ok(CommandResult {
            summary: CommandSummary::InvalidRoot(root.to_path_buf()),
            exit_status: ExitStatus::Failure,
            wait_for_exit: false,
        });
    }

    // Search for the config from the absolute root so that ancestors of a
    // relative path like "." are considered.
    let config_dir = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let loaded = load_config(&config_dir)?;
    if cmd.verbose {
        if let Some(source) = &loaded.source {
            eprintln!("{} {}", "Using config from".dimmed(), source.display());
        }
    }

    let build_file_name = match &cmd.build_file {
        Some(name) => {
            validate_build_file_name(name)?;
            name.clone()
        }
        None => loaded.config.build_file_name.clone(),
    };

    let options = ScanOptions {
        build_file_name,
        ignores: loaded.config.ignore_rules()?,
        verbose: cmd.verbose,
    };

    let result = scan_tree(root, &options);

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            root: PathBuf::from(root),
            result,
            format: cmd.format,
        }),
        exit_status: ExitStatus::Success,
        wait_for_exit: false,
    })
}
