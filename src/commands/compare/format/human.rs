//! Human-readable output formatting for compare command

use std::path::Path;

use notesim_core::compare::{ComparisonReport, ComparisonResult};
use notesim_core::format::{percent, preview};
use notesim_core::reader::read_document;

use super::{DisplayOptions, KEYWORDS_SHOWN};

const RULE_WIDTH: usize = 80;

/// Output in human-readable format
pub fn output_human(report: &ComparisonReport, opts: &DisplayOptions) {
    let heavy = "=".repeat(RULE_WIDTH);
    println!("{}", heavy);
    println!("Target file: {}", report.target);
    println!("{}", heavy);

    if !opts.quiet {
        print_target_preview(&report.target);
        for skipped in &report.skipped {
            eprintln!("Skipped {}: {}", skipped.path, skipped.reason);
        }
    }
    println!();

    if report.results.is_empty() {
        println!("No similar files found.");
        return;
    }

    println!(
        "Comparison results with {} files (sorted by combined similarity):",
        report.results.len()
    );
    println!();

    for (i, result) in report.results.iter().enumerate() {
        print_result(i + 1, result, opts);
    }
}

fn print_target_preview(target: &str) {
    let text = read_document(target);
    let light = "-".repeat(RULE_WIDTH);

    println!();
    println!("Target File Content:");
    println!("{}", light);
    println!("{}", preview(&text, 10, 500));
    println!("{}", light);
    println!(
        "Total length: {} characters, {} lines",
        text.chars().count(),
        text.split('\n').count()
    );
}

fn print_result(rank: usize, result: &ComparisonResult, opts: &DisplayOptions) {
    let file_name = Path::new(&result.path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.path.clone());

    println!("{}. {}", rank, file_name);
    println!("   Path: {}", result.path);
    println!(
        "   Combined Similarity: {}",
        percent(result.score.combined_similarity)
    );
    println!(
        "   ├─ Cosine Similarity: {}",
        percent(result.score.cosine_similarity)
    );
    println!(
        "   ├─ Euclidean Similarity: {}",
        percent(result.score.euclidean_similarity)
    );
    println!("   └─ Euclidean Distance: {:.4}", result.euclidean_distance);

    let keywords: Vec<&str> = result
        .top_keywords
        .keys()
        .take(KEYWORDS_SHOWN)
        .map(String::as_str)
        .collect();
    println!("   Top keywords: {}", keywords.join(", "));

    let best = result.sections_by_similarity();
    if opts.sections > 0 && !best.is_empty() {
        println!("   Most similar sections in this file:");
        for (i, section) in best.into_iter().take(opts.sections).enumerate() {
            println!(
                "      {}. '{}': {:.1}%",
                i + 1,
                section.heading,
                section.score.combined_similarity * 100.0
            );
            for line in preview(section.body.trim(), 3, 200).lines() {
                println!("         {}", line);
            }
            println!();
        }
    }

    println!();
}
