use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to report and the exit status
/// - `Err` if the command fails (e.g., unreadable config, invalid flags)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
