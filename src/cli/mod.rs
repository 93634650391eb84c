//! CLI argument parsing for notesim
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Notesim - rank markdown notes by similarity to a target note
#[derive(Parser, Debug)]
#[command(name = "notesim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = output::format_parser())]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, notesim_core=trace)
    #[arg(long, global = true, env = "NOTESIM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./notesim.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank candidate notes by similarity to a target note
    Compare(CompareArgs),

    /// Show the keywords extracted from a note
    Keywords(KeywordsArgs),

    /// Show the sections a note is split into
    Sections(SectionsArgs),
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Note to compare against
    pub target: PathBuf,

    /// Candidate files or directories (searched recursively)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Score with sentence embeddings instead of TF-IDF
    #[arg(long)]
    pub embedding: bool,

    /// Keywords per document kept for scoring (pseudo-document holds 3x this)
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Section matches shown per result
    #[arg(long, default_value_t = 3)]
    pub sections: usize,

    /// Maximum number of results shown
    #[arg(long)]
    pub limit: Option<usize>,

    /// Ignore headings inside fenced code blocks when splitting sections
    #[arg(long)]
    pub fence_aware: bool,
}

#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Note to analyse
    pub file: PathBuf,

    /// Keywords per document (pseudo-document holds 3x this)
    #[arg(long)]
    pub top_n: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Note to split
    pub file: PathBuf,

    /// Ignore headings inside fenced code blocks
    #[arg(long)]
    pub fence_aware: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compare_defaults() {
        let cli = Cli::try_parse_from(["notesim", "compare", "t.md", "notes/"]).unwrap();
        let Some(Commands::Compare(args)) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.target, PathBuf::from("t.md"));
        assert_eq!(args.paths, vec![PathBuf::from("notes/")]);
        assert_eq!(args.sections, 3);
        assert!(!args.embedding);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_compare_requires_candidates() {
        assert!(Cli::try_parse_from(["notesim", "compare", "t.md"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["notesim", "keywords", "a.md", "--format", "json", "-q"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }
}
