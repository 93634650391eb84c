//! Notesim Core Library
//!
//! Keyword extraction, section segmentation, and similarity ranking for
//! markdown notes.

pub mod compare;
pub mod config;
pub mod discover;
pub mod error;
pub mod format;
pub mod keywords;
pub mod logging;
pub mod reader;
pub mod records;
pub mod sections;
pub mod similarity;
pub mod text;

pub use compare::{compare_similarity, Comparator, ComparisonReport, ComparisonResult};
pub use config::EngineConfig;
pub use error::{NotesimError, Result};
