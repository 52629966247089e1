pub mod init;
pub mod scan;

use std::path::PathBuf;

use super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::ScanResult;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    /// The requested project root does not exist or is not a directory.
    InvalidRoot(PathBuf),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub result: ScanResult,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False if the config file already existed and was left untouched.
    pub created: bool,
}

/// Result of running libscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
    /// Wait for Enter before exiting (interactive sessions only).
    pub wait_for_exit: bool,
}
