//! Records output formatting for compare command

use notesim_core::compare::ComparisonReport;
use notesim_core::records::{
    format_header, format_keyword_line, format_result_line, format_section_line,
    format_warning_line,
};

use super::DisplayOptions;

/// Output in records format
pub fn output_records(report: &ComparisonReport, opts: &DisplayOptions) {
    println!("{}", format_header(report));

    for (i, result) in report.results.iter().enumerate() {
        println!("{}", format_result_line(i + 1, result));

        for (k, (term, count)) in result.top_keywords.iter().enumerate() {
            println!("{}", format_keyword_line(k + 1, term, *count));
        }

        for (s, section) in result
            .sections_by_similarity()
            .into_iter()
            .take(opts.sections)
            .enumerate()
        {
            println!("{}", format_section_line(s + 1, section));
        }
    }

    if !opts.quiet {
        for skipped in &report.skipped {
            println!(
                "{}",
                format_warning_line(&format!("skipped {}: {}", skipped.path, skipped.reason))
            );
        }
    }
}
