//! Candidate discovery from command-line paths
//!
//! Files are kept when their extension is accepted; directories are walked
//! recursively. Paths are returned as given, never canonicalized.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::EngineConfig;

/// Files found for comparison plus any arguments that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub files: Vec<String>,
    pub warnings: Vec<String>,
}

/// Expand file and directory arguments into candidate document paths
pub fn collect_candidates<P: AsRef<Path>>(paths: &[P], config: &EngineConfig) -> Discovery {
    let mut discovery = Discovery::default();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            if config.accepts_extension(path) {
                discovery.files.push(path.to_string_lossy().into_owned());
            } else {
                debug!(path = %path.display(), "skip_extension");
            }
        } else if path.is_dir() {
            collect_directory(path, config, &mut discovery);
        } else {
            let message = format!(
                "'{}' is neither a file nor a directory, skipping",
                path.display()
            );
            warn!("{}", message);
            discovery.warnings.push(message);
        }
    }

    discovery
}

fn collect_directory(dir: &Path, config: &EngineConfig, discovery: &mut Discovery) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let message = format!("error walking {}: {}", dir.display(), e);
                warn!("{}", message);
                discovery.warnings.push(message);
                continue;
            }
        };

        if entry.file_type().is_file() && config.accepts_extension(entry.path()) {
            discovery
                .files
                .push(entry.path().to_string_lossy().into_owned());
        }
    }
}
