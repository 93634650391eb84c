//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NotesimError;

/// Default keyword-extraction depth for whole documents
pub const DEFAULT_TOP_N: usize = 20;

/// Default keyword-extraction depth for sections
pub const DEFAULT_SECTION_TOP_N: usize = 10;

/// Default number of terms kept in a result's top-keyword mapping
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Default weight of cosine similarity in the combined score
pub const DEFAULT_COSINE_WEIGHT: f64 = 0.5;

/// Scoring strategy for the whole-document ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// TF-IDF over extracted keyword pseudo-documents
    #[default]
    TfIdf,
    /// Dense sentence embeddings of the raw document text
    Embedding,
}

impl FromStr for ScoringStrategy {
    type Err = NotesimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(ScoringStrategy::TfIdf),
            "embedding" | "sbert" => Ok(ScoringStrategy::Embedding),
            other => Err(NotesimError::invalid_value("scoring strategy", other)),
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringStrategy::TfIdf => write!(f, "tfidf"),
            ScoringStrategy::Embedding => write!(f, "embedding"),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scoring strategy for whole-document ranking
    #[serde(default)]
    pub strategy: ScoringStrategy,

    /// Keyword-extraction topN for whole documents
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Keyword-extraction topN for candidate sections
    #[serde(default = "default_section_top_n")]
    pub section_top_n: usize,

    /// Number of terms kept in each result's top-keyword mapping
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// Weight of cosine similarity in the combined score (Euclidean gets the rest)
    #[serde(default = "default_cosine_weight")]
    pub cosine_weight: f64,

    /// Ignore heading-like lines inside fenced code blocks when sectioning
    #[serde(default)]
    pub fence_aware_sections: bool,

    /// File extensions accepted during candidate discovery
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Additional stopwords merged into the English list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::default(),
            top_n: DEFAULT_TOP_N,
            section_top_n: DEFAULT_SECTION_TOP_N,
            top_keywords: DEFAULT_TOP_KEYWORDS,
            cosine_weight: DEFAULT_COSINE_WEIGHT,
            fence_aware_sections: false,
            extensions: default_extensions(),
            extra_stopwords: Vec::new(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_section_top_n() -> usize {
    DEFAULT_SECTION_TOP_N
}

fn default_top_keywords() -> usize {
    DEFAULT_TOP_KEYWORDS
}

fn default_cosine_weight() -> f64 {
    DEFAULT_COSINE_WEIGHT
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}
