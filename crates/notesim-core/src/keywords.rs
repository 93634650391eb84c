//! Keyword extraction from markdown text
//!
//! Structural markup (headings, bold text, link labels) is kept as whole
//! phrases with original casing. The remaining prose, minus code, is split into
//! Latin and Hangul word runs and filtered by length and stopwords. The union
//! is counted and the most frequent terms become the pseudo-document handed to
//! the vector space.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::text::{tokenize, StopWords};

static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static BOLD_RE: OnceLock<Regex> = OnceLock::new();
static LINK_RE: OnceLock<Regex> = OnceLock::new();
static FENCE_RE: OnceLock<Regex> = OnceLock::new();
static INLINE_CODE_RE: OnceLock<Regex> = OnceLock::new();
static MARKUP_RE: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

/// Minimum character length of a prose token
const MIN_TOKEN_CHARS: usize = 2;

/// How many terms per unit of topN make it into the pseudo-document
const PSEUDO_DOCUMENT_FACTOR: usize = 3;

/// Weighted bag of terms extracted from one document or section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordProfile {
    /// Space-joined top terms, each repeated by its count
    pub pseudo_document: String,
    /// Every extracted term, by descending count; ties keep first-seen order
    pub frequencies: Vec<(String, usize)>,
}

impl KeywordProfile {
    /// True when nothing indexable was extracted
    pub fn is_empty(&self) -> bool {
        self.pseudo_document.is_empty()
    }

    /// The `n` most frequent terms as an ordered mapping
    pub fn top_keywords(&self, n: usize) -> IndexMap<String, usize> {
        self.frequencies
            .iter()
            .take(n)
            .map(|(term, count)| (term.clone(), *count))
            .collect()
    }
}

/// Turns markdown into a [`KeywordProfile`]
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    stop_words: StopWords,
}

impl KeywordExtractor {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Extract keywords from `text`, keeping `3 * top_n` terms in the pseudo-document
    pub fn extract(&self, text: &str, top_n: usize) -> KeywordProfile {
        if text.is_empty() {
            return KeywordProfile::default();
        }

        let mut terms = structural_terms(text);
        terms.extend(self.prose_terms(text));

        let frequencies = rank_by_frequency(terms);
        let pseudo_document = frequencies
            .iter()
            .take(top_n.saturating_mul(PSEUDO_DOCUMENT_FACTOR))
            .flat_map(|(term, count)| std::iter::repeat_n(term.as_str(), *count))
            .collect::<Vec<_>>()
            .join(" ");

        KeywordProfile {
            pseudo_document,
            frequencies,
        }
    }

    /// Word tokens from prose with code and markup removed
    fn prose_terms(&self, text: &str) -> Vec<String> {
        let without_fences = regex(&FENCE_RE, r"(?s)```.*?```").replace_all(text, "");
        let without_code = regex(&INLINE_CODE_RE, r"`.*?`").replace_all(&without_fences, "");
        let clean = regex(&MARKUP_RE, r"[#*_\[\]()`]").replace_all(&without_code, " ");

        tokenize(&clean)
            .into_iter()
            .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|w| !self.stop_words.contains(w))
            .collect()
    }
}

/// Heading text, bold text, and link labels, in that order, as whole phrases
fn structural_terms(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = regex(&HEADING_RE, r"#{1,6}\s+(.+)")
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    terms.extend(
        regex(&BOLD_RE, r"\*\*(.+?)\*\*|__(.+?)__")
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string()),
    );

    terms.extend(
        regex(&LINK_RE, r"\[(.+?)\]\(.+?\)")
            .captures_iter(text)
            .map(|caps| caps[1].to_string()),
    );

    terms
}

/// Count terms and order by descending count, keeping first-seen order on ties
fn rank_by_frequency(terms: Vec<String>) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // stable: equal counts stay in insertion order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
