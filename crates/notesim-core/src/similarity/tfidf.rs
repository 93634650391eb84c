use std::collections::BTreeMap;

use crate::error::{NotesimError, Result};
use crate::text::vectorizer_tokens;

/// Sparse term-weight vector, iterated in term order so every sum over a row
/// adds the same terms in the same order
pub type TermVector = BTreeMap<String, f64>;

/// A TF-IDF space fitted over one batch of pseudo-documents.
///
/// Every call builds its own space: document frequencies and IDF only see
/// the documents passed to [`VectorSpace::fit`].
#[derive(Debug, Clone)]
pub struct VectorSpace {
    rows: Vec<TermVector>,
    vocabulary_len: usize,
}

impl VectorSpace {
    /// Fit the space and return L2-normalised TF-IDF rows, one per document.
    ///
    /// Fails with [`NotesimError::EmptyVocabulary`] when no document has a
    /// single indexable term.
    pub fn fit(documents: &[&str]) -> Result<Self> {
        let term_freqs: Vec<TermVector> = documents
            .iter()
            .map(|doc| term_frequencies(doc))
            .collect();

        let mut term_df: BTreeMap<&str, usize> = BTreeMap::new();
        for freqs in &term_freqs {
            for term in freqs.keys() {
                *term_df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if term_df.is_empty() {
            return Err(NotesimError::EmptyVocabulary);
        }

        let total_docs = documents.len() as f64;
        let rows = term_freqs
            .iter()
            .map(|freqs| {
                let mut vector = get_tfidf_vector(freqs, &term_df, total_docs);
                normalize(&mut vector);
                vector
            })
            .collect();

        Ok(Self {
            rows,
            vocabulary_len: term_df.len(),
        })
    }

    pub fn row(&self, index: usize) -> Option<&TermVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary_len
    }
}

fn term_frequencies(document: &str) -> TermVector {
    let mut freqs = TermVector::new();
    for token in vectorizer_tokens(document) {
        *freqs.entry(token).or_insert(0.0) += 1.0;
    }
    freqs
}

/// Raw counts weighted by smoothed IDF: `ln((1 + n) / (1 + df)) + 1`
pub fn get_tfidf_vector(
    term_freqs: &TermVector,
    term_df: &BTreeMap<&str, usize>,
    total_docs: f64,
) -> TermVector {
    let mut vector = TermVector::new();

    for (term, &tf) in term_freqs {
        let df = *term_df.get(term.as_str()).unwrap_or(&1) as f64;
        let idf = ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0;
        vector.insert(term.clone(), tf * idf);
    }

    vector
}

fn normalize(vector: &mut TermVector) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        return;
    }
    for weight in vector.values_mut() {
        *weight /= norm;
    }
}

/// Cosine of the angle between two vectors; 0 when either has zero norm
pub fn cosine_similarity(vec_a: &TermVector, vec_b: &TermVector) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

/// L2 norm of `vec_a - vec_b`
pub fn euclidean_distance(vec_a: &TermVector, vec_b: &TermVector) -> f64 {
    let mut sum = 0.0;

    for (term, weight) in vec_a {
        let diff = weight - vec_b.get(term).copied().unwrap_or(0.0);
        sum += diff * diff;
    }

    for (term, weight) in vec_b {
        if !vec_a.contains_key(term) {
            sum += weight * weight;
        }
    }

    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fit_rows_are_unit_length() {
        let space = VectorSpace::fit(&["apple banana apple", "banana cherry"]).unwrap();
        for i in 0..space.len() {
            let norm: f64 = space.row(i).unwrap().values().map(|w| w * w).sum();
            assert!((norm - 1.0).abs() < EPS);
        }
        assert_eq!(space.vocabulary_len(), 3);
    }

    #[test]
    fn test_smoothed_idf_weights() {
        // n = 2; "shared" df = 2 -> idf 1; "only" df = 1 -> idf ln(3/2) + 1
        let space = VectorSpace::fit(&["shared only", "shared"]).unwrap();
        let row = space.row(0).unwrap();
        let idf_only = (3.0f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + idf_only * idf_only).sqrt();
        assert!((row["shared"] - 1.0 / norm).abs() < EPS);
        assert!((row["only"] - idf_only / norm).abs() < EPS);
    }

    #[test]
    fn test_empty_vocabulary() {
        let err = VectorSpace::fit(&["", "a b c"]).unwrap_err();
        assert!(matches!(err, NotesimError::EmptyVocabulary));
    }

    #[test]
    fn test_empty_document_row_is_zero() {
        let space = VectorSpace::fit(&["graph theory", ""]).unwrap();
        assert!(space.row(1).unwrap().is_empty());
    }

    #[test]
    fn test_cosine_zero_norm() {
        let a = TermVector::new();
        let mut b = TermVector::new();
        b.insert("x".to_string(), 1.0);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
    }

    #[test]
    fn test_euclidean_distance_disjoint_unit_vectors() {
        let mut a = TermVector::new();
        a.insert("x".to_string(), 1.0);
        let mut b = TermVector::new();
        b.insert("y".to_string(), 1.0);
        assert!((euclidean_distance(&a, &b) - 2f64.sqrt()).abs() < EPS);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
    }
}
