//! Command dispatch logic for notesim

use std::time::Instant;

use crate::cli::Cli;
use notesim_core::error::Result;
use tracing::debug;

mod command;
mod commands;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()?;

    debug!(elapsed = ?start.elapsed(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
