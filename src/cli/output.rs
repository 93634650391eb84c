//! Output format flag parsing

use clap::builder::{PossibleValuesParser, TypedValueParser};

pub use notesim_core::format::OutputFormat;

/// Parser for `--format`, listing the accepted values in `--help`
pub fn format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(["human", "json", "records"])
        .map(|s| s.parse::<OutputFormat>().unwrap_or_default())
}
