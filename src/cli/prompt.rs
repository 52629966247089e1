//! Interactive console input used when no project root is given.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};

pub const ROOT_PROMPT: &str = "Enter the path to the CMake project root: ";

pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Ask for the project root and read one line from `reader`.
pub fn prompt_root<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<PathBuf> {
    write!(writer, "{}", ROOT_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read project root from stdin")?;

    let path = line.trim();
    if read == 0 || path.is_empty() {
        bail!("No project root entered");
    }
    Ok(PathBuf::from(path))
}

/// Block until the user presses Enter (or input is closed).
pub fn wait_for_enter<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", EXIT_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
