//! `notesim keywords` command - show what the extractor keeps from a note

use serde_json::json;

use crate::cli::{KeywordsArgs, OutputFormat};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use notesim_core::error::{NotesimError, Result};
use notesim_core::keywords::{KeywordExtractor, KeywordProfile};
use notesim_core::reader::try_read_document;
use notesim_core::records::{escape_quotes, format_keyword_line};

/// Execute the keywords command
pub fn execute(ctx: &CommandContext, args: &KeywordsArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let top_n = args.top_n.unwrap_or(config.top_n);
    if top_n == 0 {
        notesim_core::bail_invalid!("top-n (expected > 0)", top_n);
    }

    if !args.file.exists() {
        return Err(NotesimError::TargetNotFound {
            path: args.file.clone(),
        });
    }
    let path = args.file.to_string_lossy().into_owned();
    let text = try_read_document(&path)?;

    let profile = KeywordExtractor::new(config.stop_words()).extract(&text, top_n);
    trace_command!(ctx.cli, ctx.start, "extract_keywords");

    match ctx.cli.format {
        OutputFormat::Human => output_human(&path, top_n, &profile),
        OutputFormat::Json => {
            let keywords: Vec<_> = profile
                .frequencies
                .iter()
                .map(|(term, count)| json!({ "term": term, "count": count }))
                .collect();
            let output = json!({
                "path": path,
                "top_n": top_n,
                "keywords": keywords,
                "pseudo_document": profile.pseudo_document,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H notesim=1 records=1 mode=keywords path=\"{}\" terms={}",
                escape_quotes(&path),
                profile.frequencies.len()
            );
            for (i, (term, count)) in profile.frequencies.iter().enumerate() {
                println!("{}", format_keyword_line(i + 1, term, *count));
            }
            println!("P \"{}\"", escape_quotes(&profile.pseudo_document));
        }
    }

    Ok(())
}

fn output_human(path: &str, top_n: usize, profile: &KeywordProfile) {
    if profile.is_empty() {
        println!("No keywords found in {}", path);
        return;
    }

    println!("Keywords in {} ({} terms):", path, profile.frequencies.len());
    for (term, count) in &profile.frequencies {
        println!("  {:>4}  {}", count, term);
    }
    println!();
    println!("Pseudo-document (top {} terms):", top_n.saturating_mul(3));
    println!("  {}", profile.pseudo_document);
}
