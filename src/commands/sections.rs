//! `notesim sections` command - show how a note is split into sections

use serde_json::json;

use crate::cli::{OutputFormat, SectionsArgs};
use crate::commands::dispatch::CommandContext;
use notesim_core::error::{NotesimError, Result};
use notesim_core::format::preview;
use notesim_core::reader::try_read_document;
use notesim_core::records::escape_quotes;
use notesim_core::sections::{segment_with, SegmentOptions};

/// Execute the sections command
pub fn execute(ctx: &CommandContext, args: &SectionsArgs) -> Result<()> {
    let config = ctx.load_config()?;

    if !args.file.exists() {
        return Err(NotesimError::TargetNotFound {
            path: args.file.clone(),
        });
    }
    let path = args.file.to_string_lossy().into_owned();
    let text = try_read_document(&path)?;

    let options = SegmentOptions {
        fence_aware: args.fence_aware || config.fence_aware_sections,
    };
    let sections = segment_with(&text, options);

    match ctx.cli.format {
        OutputFormat::Human => {
            if sections.is_empty() {
                println!("No sections found in {}", path);
                return Ok(());
            }
            for (i, section) in sections.iter().enumerate() {
                println!("{}. {}", i + 1, section.heading);
                for line in preview(section.body.trim(), 3, 200).lines() {
                    println!("   {}", line);
                }
                println!();
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "path": path,
                "fence_aware": options.fence_aware,
                "sections": sections,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H notesim=1 records=1 mode=sections path=\"{}\" sections={}",
                escape_quotes(&path),
                sections.len()
            );
            for (i, section) in sections.iter().enumerate() {
                println!(
                    "S {} \"{}\" chars={}",
                    i + 1,
                    escape_quotes(&section.heading),
                    section.body.chars().count()
                );
            }
        }
    }

    Ok(())
}
