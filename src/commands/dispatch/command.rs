//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use notesim_core::config::EngineConfig;
use notesim_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Load the engine configuration from `--config` or the usual locations
    pub fn load_config(&self) -> Result<EngineConfig> {
        EngineConfig::discover(self.cli.config.as_deref(), self.cwd)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notesim {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rank markdown notes by similarity to a target note.");
        println!();
        println!("Run `notesim --help` for usage information.");
        Ok(())
    }
}
