use std::{io, process::ExitCode};

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Arguments, Command, OutputFormat, ScanCommand};
pub use commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
pub use exit_status::ExitStatus;
pub use report::report_to;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result)?;

    if result.wait_for_exit {
        prompt::wait_for_enter(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    }

    Ok(result.exit_status.into())
}
