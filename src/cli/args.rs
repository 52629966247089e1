//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: List the libraries declared under a CMake project root
//! - `init`: Initialize a libscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

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
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list for humans
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// CMake project root directory (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Build file name to look for in every directory (overrides config file)
    #[arg(long)]
    pub build_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List libraries declared via find_package, FetchContent and target_link_libraries
    Scan(ScanCommand),
    /// Initialize a new .libscanrc.json configuration file
    Init,
}
