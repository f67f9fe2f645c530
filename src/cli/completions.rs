//! `completions` subcommand.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

const BIN_NAME: &str = "workers-preview";

/// Write the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, &mut std::io::stdout());
    Ok(())
}
