//! JSON output formatting for compare command

use notesim_core::compare::ComparisonReport;
use notesim_core::error::Result;

/// Output the whole report as JSON
pub fn output_json(report: &ComparisonReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
