//! Document comparison: rank candidates against a target, then find the
//! best-matching sections inside each candidate.
//!
//! Whole-document ranking scores every candidate in one shared vector space.
//! Section scoring builds a fresh two-document space per section, so section
//! scores are only comparable within one candidate.

mod model;

use std::time::Instant;

use tracing::{debug, info, warn};

pub use model::{
    ComparisonPhase, ComparisonReport, ComparisonResult, Document, SectionMatch,
    SkippedCandidate,
};
use model::Candidate;

use crate::config::{EngineConfig, ScoringStrategy};
use crate::error::{NotesimError, Result};
use crate::keywords::KeywordExtractor;
use crate::reader::read_document;
use crate::sections::{segment_with, Section, SegmentOptions};
use crate::similarity::{build_scorer, DocumentScorer, PairScore, ScoringInput, TfIdfScorer};
use crate::trace_time;

type ProgressFn = Box<dyn Fn(&str) + Send + Sync>;

/// Runs one comparison per call; holds no state between calls
pub struct Comparator {
    config: EngineConfig,
    extractor: KeywordExtractor,
    scorer: Box<dyn DocumentScorer>,
    section_scorer: TfIdfScorer,
    progress: Option<ProgressFn>,
}

impl Comparator {
    /// Build a comparator from configuration.
    ///
    /// Fails when the configuration is invalid or asks for an unavailable
    /// embedding backend.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let scorer = build_scorer(&config)?;
        Ok(Self::with_scorer(config, scorer))
    }

    /// Build a comparator around an explicit whole-document scorer
    pub fn with_scorer(config: EngineConfig, scorer: Box<dyn DocumentScorer>) -> Self {
        Self {
            extractor: KeywordExtractor::new(config.stop_words()),
            section_scorer: TfIdfScorer::new(config.cosine_weight),
            scorer,
            config,
            progress: None,
        }
    }

    /// Receive free-text progress notices while a comparison runs
    pub fn with_progress(mut self, progress: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn notify(&self, message: &str) {
        if let Some(progress) = &self.progress {
            progress(message);
        }
    }

    fn enter(&self, phase: &mut ComparisonPhase, next: ComparisonPhase) {
        debug!(from = %phase, to = %next, "phase");
        *phase = next;
    }

    /// Compare `target` against every candidate path.
    ///
    /// The target path is excluded from the candidates by exact string match.
    /// Unreadable or empty candidates are skipped and listed in the report.
    /// An unreadable target is an error; a target with no indexable terms, or
    /// no surviving candidates, gives an empty `Failed` report.
    #[tracing::instrument(
        skip(self, candidates),
        fields(candidates = candidates.len(), strategy = self.scorer.name())
    )]
    pub fn compare<S: AsRef<str>>(&self, target: &str, candidates: &[S]) -> Result<ComparisonReport> {
        let start = Instant::now();
        let strategy = self.scorer.name();
        let mut phase = ComparisonPhase::Idle;

        self.enter(&mut phase, ComparisonPhase::ReadingTarget);
        self.notify("Reading and processing target file...");
        let Some(target_doc) = self.load(target, self.config.top_n) else {
            self.enter(&mut phase, ComparisonPhase::Failed);
            return Err(NotesimError::TargetUnreadable {
                path: target.to_string(),
            });
        };
        if target_doc.profile.is_empty() {
            warn!(path = target, "target has no indexable keywords");
            self.enter(&mut phase, ComparisonPhase::Failed);
            return Ok(ComparisonReport::failed(target, strategy, Vec::new()));
        }

        self.enter(&mut phase, ComparisonPhase::ReadingCandidates);
        let pending = candidates.iter().filter(|c| c.as_ref() != target).count();
        self.notify(&format!("Processing {} comparison files...", pending));
        let (survivors, skipped) = self.load_candidates(target, candidates);
        if survivors.is_empty() {
            warn!("no valid comparison files found");
            self.enter(&mut phase, ComparisonPhase::Failed);
            return Ok(ComparisonReport::failed(target, strategy, skipped));
        }
        trace_time!(start, "read_candidates");

        self.enter(&mut phase, ComparisonPhase::Vectorizing);
        self.notify("Calculating document similarity...");
        let inputs: Vec<ScoringInput<'_>> = survivors
            .iter()
            .map(|c| scoring_input(&c.document))
            .collect();
        let scores = match self.scorer.score_batch(scoring_input(&target_doc), &inputs) {
            Ok(scores) => scores,
            Err(NotesimError::EmptyVocabulary) => {
                warn!("empty vocabulary across target and candidates");
                self.enter(&mut phase, ComparisonPhase::Failed);
                return Ok(ComparisonReport::failed(target, strategy, skipped));
            }
            Err(e) => {
                self.enter(&mut phase, ComparisonPhase::Failed);
                return Err(e);
            }
        };
        trace_time!(start, "vectorize");

        self.enter(&mut phase, ComparisonPhase::RankingSections);
        self.notify("Ranking sections...");
        let mut results: Vec<ComparisonResult> = survivors
            .iter()
            .zip(scores)
            .map(|(candidate, pair)| self.assemble(&target_doc, candidate, pair))
            .collect();

        // stable: exact ties keep candidate order
        results.sort_by(|a, b| {
            b.score
                .combined_similarity
                .total_cmp(&a.score.combined_similarity)
        });
        trace_time!(start, "rank_sections");

        self.enter(&mut phase, ComparisonPhase::Done);
        info!(results = results.len(), skipped = skipped.len(), "comparison complete");

        Ok(ComparisonReport {
            target: target.to_string(),
            strategy: strategy.to_string(),
            phase,
            results,
            skipped,
        })
    }

    /// Read and profile a document; `None` when its text is empty
    fn load(&self, path: &str, top_n: usize) -> Option<Document> {
        let text = read_document(path);
        if text.is_empty() {
            return None;
        }
        let profile = self.extractor.extract(&text, top_n);
        Some(Document {
            path: path.to_string(),
            text,
            profile,
        })
    }

    fn load_candidates<S: AsRef<str>>(
        &self,
        target: &str,
        candidates: &[S],
    ) -> (Vec<Candidate>, Vec<SkippedCandidate>) {
        let options = SegmentOptions {
            fence_aware: self.config.fence_aware_sections,
        };
        let mut survivors = Vec::new();
        let mut skipped = Vec::new();

        for path in candidates {
            let path = path.as_ref();
            if path == target {
                continue;
            }

            match self.load(path, self.config.top_n) {
                Some(document) => {
                    let sections = segment_with(&document.text, options);
                    survivors.push(Candidate { document, sections });
                }
                None => {
                    warn!(path, "skipping unreadable or empty candidate");
                    skipped.push(SkippedCandidate {
                        path: path.to_string(),
                        reason: "unreadable or empty".to_string(),
                    });
                }
            }
        }

        (survivors, skipped)
    }

    fn assemble(&self, target: &Document, candidate: &Candidate, pair: PairScore) -> ComparisonResult {
        ComparisonResult {
            path: candidate.document.path.clone(),
            score: pair.score,
            euclidean_distance: pair.euclidean_distance,
            top_keywords: candidate
                .document
                .profile
                .top_keywords(self.config.top_keywords),
            sections: self.rank_sections(&target.profile.pseudo_document, &candidate.sections),
        }
    }

    /// Score each section against the whole target in its own pairwise space
    fn rank_sections(&self, target_pseudo: &str, sections: &[Section]) -> Vec<SectionMatch> {
        sections
            .iter()
            .filter_map(|section| {
                let profile = self
                    .extractor
                    .extract(&section.body, self.config.section_top_n);
                match self.section_scorer.score(target_pseudo, &profile.pseudo_document) {
                    Ok(pair) => Some(SectionMatch {
                        heading: section.heading.clone(),
                        body: section.body.clone(),
                        score: pair.score,
                    }),
                    Err(e) => {
                        debug!(heading = %section.heading, error = %e, "section dropped");
                        None
                    }
                }
            })
            .collect()
    }
}

fn scoring_input(document: &Document) -> ScoringInput<'_> {
    ScoringInput {
        text: &document.text,
        pseudo_document: &document.profile.pseudo_document,
    }
}

/// Compare a target document against candidate paths with default settings.
///
/// Returns results sorted by combined similarity, best first. Requesting the
/// embedding strategy without a usable backend fails here.
pub fn compare_similarity<S: AsRef<str>>(
    target: &str,
    candidates: &[S],
    use_embedding_strategy: bool,
) -> Result<Vec<ComparisonResult>> {
    let config = EngineConfig {
        strategy: if use_embedding_strategy {
            ScoringStrategy::Embedding
        } else {
            ScoringStrategy::TfIdf
        },
        ..Default::default()
    };
    let report = Comparator::new(config)?.compare(target, candidates)?;
    Ok(report.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Scores candidates by their position so tie handling can be checked
    struct FixedScorer(Vec<f64>);

    impl DocumentScorer for FixedScorer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score_batch(
            &self,
            _target: ScoringInput<'_>,
            candidates: &[ScoringInput<'_>],
        ) -> Result<Vec<PairScore>> {
            Ok(candidates
                .iter()
                .zip(&self.0)
                .map(|(_, &cosine)| PairScore::new(cosine, 0.0, 0.5))
                .collect())
        }
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(ComparisonPhase::RankingSections.to_string(), "ranking_sections");
        assert_eq!(ComparisonPhase::Done.to_string(), "done");
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let dir = tempdir().unwrap();
        let target = write(dir.path(), "t.md", "graph nodes");
        let a = write(dir.path(), "a.md", "alpha");
        let b = write(dir.path(), "b.md", "bravo");
        let c = write(dir.path(), "c.md", "charlie");

        let comparator = Comparator::with_scorer(
            EngineConfig::default(),
            Box::new(FixedScorer(vec![0.2, 0.9, 0.2])),
        );
        let report = comparator.compare(&target, &[&a, &b, &c]).unwrap();
        let paths: Vec<&str> = report.results.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec![b.as_str(), a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_progress_notices() {
        let dir = tempdir().unwrap();
        let target = write(dir.path(), "t.md", "graph theory notes");
        let other = write(dir.path(), "o.md", "graph traversal notes");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let comparator = Comparator::new(EngineConfig::default())
            .unwrap()
            .with_progress(move |msg| sink.lock().unwrap().push(msg.to_string()));
        comparator.compare(&target, &[&target, &other]).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1], "Processing 1 comparison files...");
    }

    #[test]
    fn test_empty_vocabulary_batch_fails_softly() {
        let dir = tempdir().unwrap();
        // only a one-letter heading: extractable, but nothing for the vectorizer
        let target = write(dir.path(), "t.md", "# x\n");
        let other = write(dir.path(), "o.md", "# y\n");

        let report = Comparator::new(EngineConfig::default())
            .unwrap()
            .compare(&target, &[other])
            .unwrap();
        assert_eq!(report.phase, ComparisonPhase::Failed);
        assert!(report.results.is_empty());
    }
}
