//! Output formatting for compare command

pub mod human;
pub mod json;
pub mod records;

pub use human::output_human;
pub use json::output_json;
pub use records::output_records;

/// How much of a report to show
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Section matches shown per result
    pub sections: usize,
    pub quiet: bool,
}

/// Keywords listed per result in human output
pub const KEYWORDS_SHOWN: usize = 5;
