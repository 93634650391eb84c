//! Document text loading
//!
//! Reading never fails outward: an unreadable file yields an empty string and
//! a warning, and empty text is treated as "nothing to compare" downstream.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{NotesimError, Result};

/// Read a UTF-8 document, returning an empty string on any failure
pub fn read_document(path: &str) -> String {
    match try_read_document(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path, error = %e, "document_unreadable");
            String::new()
        }
    }
}

/// Read a UTF-8 document, reporting why it failed
pub fn try_read_document(path: &str) -> Result<String> {
    fs::read_to_string(Path::new(path)).map_err(|e| NotesimError::io_operation("read", path, e))
}
