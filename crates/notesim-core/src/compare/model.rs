//! Result types produced by a comparison run

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::keywords::KeywordProfile;
use crate::sections::Section;
use crate::similarity::SimilarityScore;

/// A document read for one comparison run
#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub text: String,
    pub profile: KeywordProfile,
}

/// A candidate document with its sections
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub document: Document,
    pub sections: Vec<Section>,
}

/// One candidate section scored against the whole target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionMatch {
    pub heading: String,
    pub body: String,
    #[serde(flatten)]
    pub score: SimilarityScore,
}

/// Similarity of one candidate document to the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub path: String,
    #[serde(flatten)]
    pub score: SimilarityScore,
    pub euclidean_distance: f64,
    /// Most frequent terms, by descending count
    pub top_keywords: IndexMap<String, usize>,
    /// One entry per scorable section, in document order
    pub sections: Vec<SectionMatch>,
}

impl ComparisonResult {
    /// Section matches ordered by combined similarity, best first
    pub fn sections_by_similarity(&self) -> Vec<&SectionMatch> {
        let mut sorted: Vec<&SectionMatch> = self.sections.iter().collect();
        sorted.sort_by(|a, b| {
            b.score
                .combined_similarity
                .total_cmp(&a.score.combined_similarity)
        });
        sorted
    }
}

/// Progress of a comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPhase {
    Idle,
    ReadingTarget,
    ReadingCandidates,
    Vectorizing,
    RankingSections,
    Done,
    Failed,
}

impl fmt::Display for ComparisonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComparisonPhase::Idle => "idle",
            ComparisonPhase::ReadingTarget => "reading_target",
            ComparisonPhase::ReadingCandidates => "reading_candidates",
            ComparisonPhase::Vectorizing => "vectorizing",
            ComparisonPhase::RankingSections => "ranking_sections",
            ComparisonPhase::Done => "done",
            ComparisonPhase::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// A candidate dropped before scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCandidate {
    pub path: String,
    pub reason: String,
}

/// Everything a comparison run produced
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub target: String,
    pub strategy: String,
    /// Terminal phase: `Done`, or `Failed` when nothing could be compared
    pub phase: ComparisonPhase,
    /// Sorted by combined similarity, best first
    pub results: Vec<ComparisonResult>,
    pub skipped: Vec<SkippedCandidate>,
}

impl ComparisonReport {
    pub(crate) fn failed(target: &str, strategy: &str, skipped: Vec<SkippedCandidate>) -> Self {
        Self {
            target: target.to_string(),
            strategy: strategy.to_string(),
            phase: ComparisonPhase::Failed,
            results: Vec::new(),
            skipped,
        }
    }
}
