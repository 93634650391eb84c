//! Output format handling for notesim
//!
//! - human: readable report for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for piping into other tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotesimError;

/// Output format for notesim commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// One record per line
    Records,
}

impl FromStr for OutputFormat {
    type Err = NotesimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(NotesimError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render a similarity in `[0, 1]` as a percentage with two decimals
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// First `max_lines` lines of `text`, cut at `max_chars` characters.
///
/// Appends `...` when anything was dropped.
pub fn preview(text: &str, max_lines: usize, max_chars: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = lines
        .iter()
        .take(max_lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    let mut truncated = lines.len() > max_lines;

    if out.chars().count() > max_chars {
        out = out.chars().take(max_chars).collect();
        truncated = true;
    }
    if truncated {
        out.push_str("...");
    }
    out
}
