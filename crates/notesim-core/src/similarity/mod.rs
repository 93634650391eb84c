//! Similarity scoring between documents
//!
//! Two metrics are computed for every pair: cosine similarity and a
//! distance-derived similarity `1 / (1 + d)`. The combined score is their
//! weighted mean (an even split by default).

mod embedding;

pub mod tfidf;

pub use embedding::EmbeddingScorer;

use serde::Serialize;

use crate::config::{EngineConfig, ScoringStrategy, DEFAULT_COSINE_WEIGHT};
use crate::error::Result;
use tfidf::{cosine_similarity, euclidean_distance, VectorSpace};

/// Similarity of one document (or section) to the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    pub cosine_similarity: f64,
    pub euclidean_similarity: f64,
    pub combined_similarity: f64,
}

impl SimilarityScore {
    /// Build a score from a cosine value and a raw Euclidean distance
    pub fn from_distance(cosine: f64, distance: f64, cosine_weight: f64) -> Self {
        let euclidean_similarity = 1.0 / (1.0 + distance);
        Self {
            cosine_similarity: cosine,
            euclidean_similarity,
            combined_similarity: cosine_weight * cosine + (1.0 - cosine_weight) * euclidean_similarity,
        }
    }
}

/// A score together with the distance it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore {
    pub score: SimilarityScore,
    pub euclidean_distance: f64,
}

impl PairScore {
    pub fn new(cosine: f64, distance: f64, cosine_weight: f64) -> Self {
        Self {
            score: SimilarityScore::from_distance(cosine, distance, cosine_weight),
            euclidean_distance: distance,
        }
    }
}

/// The two views of a document a scorer may consume
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    /// Raw document text
    pub text: &'a str,
    /// Keyword pseudo-document
    pub pseudo_document: &'a str,
}

/// Strategy for the whole-document ranking pass
pub trait DocumentScorer {
    fn name(&self) -> &'static str;

    /// Score every candidate against the target, aligned with input order
    fn score_batch(
        &self,
        target: ScoringInput<'_>,
        candidates: &[ScoringInput<'_>],
    ) -> Result<Vec<PairScore>>;
}

/// Build the scorer the configuration asks for.
///
/// Requesting the embedding strategy without a usable backend is an error
/// here, before any scoring happens.
pub fn build_scorer(config: &EngineConfig) -> Result<Box<dyn DocumentScorer>> {
    match config.strategy {
        ScoringStrategy::TfIdf => Ok(Box::new(TfIdfScorer::new(config.cosine_weight))),
        ScoringStrategy::Embedding => Ok(Box::new(EmbeddingScorer::new(config.cosine_weight)?)),
    }
}

/// TF-IDF scorer over keyword pseudo-documents
#[derive(Debug, Clone, Copy)]
pub struct TfIdfScorer {
    cosine_weight: f64,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self::new(DEFAULT_COSINE_WEIGHT)
    }
}

impl TfIdfScorer {
    pub fn new(cosine_weight: f64) -> Self {
        Self { cosine_weight }
    }

    /// Score two pseudo-documents in their own two-document space
    pub fn score(&self, a: &str, b: &str) -> Result<PairScore> {
        let space = VectorSpace::fit(&[a, b])?;
        Ok(self.measure(&space, 0, 1))
    }

    /// Score each candidate against the target in one shared space
    pub fn score_many(&self, target: &str, candidates: &[&str]) -> Result<Vec<PairScore>> {
        let mut documents = Vec::with_capacity(candidates.len() + 1);
        documents.push(target);
        documents.extend_from_slice(candidates);

        let space = VectorSpace::fit(&documents)?;
        Ok((1..space.len())
            .map(|i| self.measure(&space, 0, i))
            .collect())
    }

    fn measure(&self, space: &VectorSpace, a: usize, b: usize) -> PairScore {
        let empty = tfidf::TermVector::new();
        let row_a = space.row(a).unwrap_or(&empty);
        let row_b = space.row(b).unwrap_or(&empty);
        PairScore::new(
            cosine_similarity(row_a, row_b),
            euclidean_distance(row_a, row_b),
            self.cosine_weight,
        )
    }
}

impl DocumentScorer for TfIdfScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score_batch(
        &self,
        target: ScoringInput<'_>,
        candidates: &[ScoringInput<'_>],
    ) -> Result<Vec<PairScore>> {
        let pseudo: Vec<&str> = candidates.iter().map(|c| c.pseudo_document).collect();
        self.score_many(target.pseudo_document, &pseudo)
    }
}
