use std::{
    io::{self, IsTerminal, Read},
    process,
};

use clap::CommandFactory;
use eyre::Context;

use crate::cli::Cli;

/// Reads all of stdin into memory.
///
/// Coded data is binary, so nobody is expected to type it. When stdin
/// is connected to a terminal, the process prints the help and exits
/// instead of waiting for input.
pub fn read_stdin() -> eyre::Result<Vec<u8>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    let mut buf = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut buf)
        .context("failed to read from stdin")?;

    Ok(buf)
}
