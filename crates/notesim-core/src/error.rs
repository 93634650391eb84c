//! Error types and exit codes for notesim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags/args, unavailable backend)
//! - 3: Data error (missing or unreadable target, no candidates)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or configuration (2)
    Usage = 2,
    /// Data error - target missing or unreadable, nothing to compare (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notesim operations
#[derive(Error, Debug)]
pub enum NotesimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("embedding backend unavailable: {0}")]
    EmbeddingBackendUnavailable(String),

    // Data errors (exit code 3)
    #[error("target file not found: {path:?}")]
    TargetNotFound { path: PathBuf },

    #[error("could not read target file {path}")]
    TargetUnreadable { path: String },

    #[error("no valid comparison files found")]
    NoCandidates,

    /// Raised by the vector-space builder; callers drop the pair instead of
    /// surfacing it.
    #[error("empty vocabulary; documents contain no indexable terms")]
    EmptyVocabulary,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NotesimError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NotesimError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotesimError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotesimError::UnknownFormat(_)
            | NotesimError::UsageError(_)
            | NotesimError::InvalidValue { .. }
            | NotesimError::EmbeddingBackendUnavailable(_) => ExitCode::Usage,

            NotesimError::TargetNotFound { .. }
            | NotesimError::TargetUnreadable { .. }
            | NotesimError::NoCandidates => ExitCode::Data,

            NotesimError::EmptyVocabulary
            | NotesimError::Io(_)
            | NotesimError::Json(_)
            | NotesimError::Toml(_)
            | NotesimError::FailedOperationWithTarget { .. }
            | NotesimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NotesimError::UnknownFormat(_) => "unknown_format",
            NotesimError::UsageError(_) => "usage_error",
            NotesimError::InvalidValue { .. } => "invalid_value",
            NotesimError::EmbeddingBackendUnavailable(_) => "embedding_backend_unavailable",
            NotesimError::TargetNotFound { .. } => "target_not_found",
            NotesimError::TargetUnreadable { .. } => "target_unreadable",
            NotesimError::NoCandidates => "no_candidates",
            NotesimError::EmptyVocabulary => "empty_vocabulary",
            NotesimError::Io(_) => "io_error",
            NotesimError::Json(_) => "json_error",
            NotesimError::Toml(_) => "toml_error",
            NotesimError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NotesimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for notesim operations
pub type Result<T> = std::result::Result<T, NotesimError>;
