//! Sentence-embedding scorer.
//!
//! Wraps fastembed's `TextEmbedding` (all-MiniLM-L6-v2) and scores raw
//! document text instead of keyword pseudo-documents. The backend is compiled
//! in with the `embeddings` cargo feature; without it, construction fails with
//! [`NotesimError::EmbeddingBackendUnavailable`]. The model is downloaded on
//! first use.

use tracing::debug;

use super::{DocumentScorer, PairScore, ScoringInput};
use crate::error::{NotesimError, Result};

#[cfg_attr(not(feature = "embeddings"), allow(dead_code))]
pub struct EmbeddingScorer {
    #[cfg(feature = "embeddings")]
    model: fastembed::TextEmbedding,
    cosine_weight: f64,
}

impl EmbeddingScorer {
    /// Initialize the embedding model.
    #[cfg(feature = "embeddings")]
    pub fn new(cosine_weight: f64) -> Result<Self> {
        let options = fastembed::InitOptions::new(fastembed::EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(false);
        let model = fastembed::TextEmbedding::try_new(options).map_err(|e| {
            NotesimError::EmbeddingBackendUnavailable(format!("model initialization failed: {e}"))
        })?;
        debug!("embedding_model_ready");

        Ok(Self {
            model,
            cosine_weight,
        })
    }

    #[cfg(not(feature = "embeddings"))]
    pub fn new(_cosine_weight: f64) -> Result<Self> {
        debug!("embedding_backend_missing");
        Err(NotesimError::EmbeddingBackendUnavailable(
            "notesim was built without the `embeddings` feature".to_string(),
        ))
    }

    #[cfg(feature = "embeddings")]
    fn embed(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        let expected = texts.len();
        let vectors = self
            .model
            .embed(texts, None)
            .map_err(|e| NotesimError::Other(format!("document embedding failed: {e}")))?;
        if vectors.len() != expected {
            return Err(NotesimError::Other(format!(
                "embedding backend returned {} vectors for {} documents",
                vectors.len(),
                expected
            )));
        }
        Ok(vectors)
    }

    #[cfg(not(feature = "embeddings"))]
    fn embed(&self, _texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        Err(NotesimError::EmbeddingBackendUnavailable(
            "notesim was built without the `embeddings` feature".to_string(),
        ))
    }
}

impl DocumentScorer for EmbeddingScorer {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn score_batch(
        &self,
        target: ScoringInput<'_>,
        candidates: &[ScoringInput<'_>],
    ) -> Result<Vec<PairScore>> {
        let mut texts = Vec::with_capacity(candidates.len() + 1);
        texts.push(target.text);
        texts.extend(candidates.iter().map(|c| c.text));

        let vectors = self.embed(texts)?;
        let Some((target_vec, rest)) = vectors.split_first() else {
            return Ok(Vec::new());
        };

        Ok(rest
            .iter()
            .map(|v| {
                PairScore::new(
                    dense_cosine(target_vec, v),
                    dense_distance(target_vec, v),
                    self.cosine_weight,
                )
            })
            .collect())
    }
}

/// Cosine similarity of two dense vectors; 0 when either has zero norm
pub(crate) fn dense_cosine(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Euclidean distance between two dense vectors of equal length
pub(crate) fn dense_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
