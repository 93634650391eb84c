//! `notesim compare` command - rank candidate notes against a target
//!
//! - files are kept when their extension is accepted, directories are searched
//!   recursively
//! - a missing target, or no candidate files at all, is a data error
//! - `--limit` trims the ranked list after scoring; every candidate is still
//!   part of the shared vector space

pub mod format;

use std::path::Path;

use tracing::debug;

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use notesim_core::compare::Comparator;
use notesim_core::config::{EngineConfig, ScoringStrategy};
use notesim_core::discover::collect_candidates;
use notesim_core::error::{NotesimError, Result};

use self::format::{output_human, output_json, output_records, DisplayOptions};

/// Execute the compare command
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let cli = ctx.cli;
    if args.limit == Some(0) {
        notesim_core::bail_usage!("--limit must be at least 1");
    }
    let config = apply_overrides(ctx.load_config()?, args);
    trace_command!(cli, ctx.start, "load_config");

    if !args.target.exists() {
        return Err(NotesimError::TargetNotFound {
            path: args.target.clone(),
        });
    }

    let discovery = collect_candidates(&args.paths, &config);
    if !cli.quiet && cli.format == OutputFormat::Human {
        for warning in &discovery.warnings {
            eprintln!("Warning: {}", warning);
        }
    }
    if discovery.files.is_empty() {
        return Err(NotesimError::NoCandidates);
    }
    trace_command!(cli, ctx.start, "discover_candidates");

    if cli.verbose {
        debug!(
            target = %args.target.display(),
            candidates = discovery.files.len(),
            strategy = %config.strategy,
            "compare_params"
        );
    }

    let target = path_arg(&args.target);
    let mut comparator = Comparator::new(config)?;
    let interactive = cli.format == OutputFormat::Human && !cli.quiet;
    if interactive {
        let others = discovery.files.iter().filter(|f| **f != target).count();
        println!("Comparing target file with {} files...", others);
        println!();
        comparator = comparator.with_progress(|message| eprintln!("{}", message));
    }

    let mut report = comparator.compare(&target, &discovery.files)?;
    trace_command!(cli, ctx.start, "compare");

    if let Some(limit) = args.limit {
        report.results.truncate(limit);
    }

    let opts = DisplayOptions {
        sections: args.sections,
        quiet: cli.quiet,
    };
    match cli.format {
        OutputFormat::Human => output_human(&report, &opts),
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Records => output_records(&report, &opts),
    }

    Ok(())
}

/// Command-line flags win over configuration file values
fn apply_overrides(mut config: EngineConfig, args: &CompareArgs) -> EngineConfig {
    if args.embedding {
        config.strategy = ScoringStrategy::Embedding;
    }
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    if args.fence_aware {
        config.fence_aware_sections = true;
    }
    config
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
