//! Subcommand routing

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, keywords, sections};
use notesim_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Compare(args) => compare::execute(ctx, args),
            Commands::Keywords(args) => keywords::execute(ctx, args),
            Commands::Sections(args) => sections::execute(ctx, args),
        }
    }
}
