//! Engine configuration for notesim
//!
//! Configuration is read from TOML. Lookup order: an explicit path, then
//! `notesim.toml` in the working directory, then the user config directory
//! (`<config dir>/notesim/config.toml`). Missing files fall back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NotesimError, Result};
use crate::text::StopWords;

pub use types::{
    EngineConfig, ScoringStrategy, DEFAULT_COSINE_WEIGHT, DEFAULT_SECTION_TOP_N,
    DEFAULT_TOP_KEYWORDS, DEFAULT_TOP_N,
};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "notesim.toml";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NotesimError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NotesimError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist; discovered locations are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::search_paths(cwd) {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "config_discovered");
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn search_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("notesim").join("config.toml"));
        }
        paths
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cosine_weight) {
            crate::bail_invalid!("cosine_weight (expected 0.0..=1.0)", self.cosine_weight);
        }
        if self.top_n == 0 {
            crate::bail_invalid!("top_n (expected > 0)", self.top_n);
        }
        if self.section_top_n == 0 {
            crate::bail_invalid!("section_top_n (expected > 0)", self.section_top_n);
        }
        Ok(())
    }

    /// Build the stopword sets this configuration asks for
    pub fn stop_words(&self) -> StopWords {
        StopWords::default().with_extra(self.extra_stopwords.iter().cloned())
    }

    /// Whether a path's extension is accepted for comparison
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}
