//! Line formats for records output
//!
//! Every line starts with a one-letter tag: `H` header, `R` ranked document,
//! `K` keyword, `S` section, `W` warning.

use crate::compare::{ComparisonReport, ComparisonResult, SectionMatch};

/// Escape double quotes for embedding in a quoted field
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

pub fn format_header(report: &ComparisonReport) -> String {
    format!(
        "H notesim=1 records=1 mode=compare target=\"{}\" strategy={} results={}",
        escape_quotes(&report.target),
        report.strategy,
        report.results.len()
    )
}

/// R-line for one ranked document
pub fn format_result_line(rank: usize, result: &ComparisonResult) -> String {
    format!(
        "R {} \"{}\" combined={:.4} cosine={:.4} euclidean={:.4} distance={:.4}",
        rank,
        escape_quotes(&result.path),
        result.score.combined_similarity,
        result.score.cosine_similarity,
        result.score.euclidean_similarity,
        result.euclidean_distance
    )
}

pub fn format_keyword_line(rank: usize, term: &str, count: usize) -> String {
    format!("K {} \"{}\" count={}", rank, escape_quotes(term), count)
}

pub fn format_section_line(rank: usize, section: &SectionMatch) -> String {
    format!(
        "S {} \"{}\" combined={:.4} cosine={:.4} euclidean={:.4}",
        rank,
        escape_quotes(&section.heading),
        section.score.combined_similarity,
        section.score.cosine_similarity,
        section.score.euclidean_similarity
    )
}

pub fn format_warning_line(message: &str) -> String {
    format!("W \"{}\"", escape_quotes(message))
}
