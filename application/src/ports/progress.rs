//! Progress notification port
//!
//! Defines the interface for reporting progress through the retrieval
//! cascade and the analysis call.

use psalter_domain::{CandidateOutcome, Model, RetrievalStage, RetrievedLyrics, Song};

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a cascade stage starts with its resolved candidate count
    fn on_stage_start(&self, stage: RetrievalStage, candidates: usize);

    /// Called after each candidate URL was tried
    fn on_candidate_result(&self, stage: RetrievalStage, url: &str, outcome: &CandidateOutcome);

    /// Called when a stage ends without an accepted candidate
    fn on_stage_complete(&self, stage: RetrievalStage);

    fn on_lyrics_found(&self, _lyrics: &RetrievedLyrics) {}

    fn on_fallback(&self, _song: &Song) {}

    fn on_analysis_start(&self, _model: &Model) {}

    fn on_analysis_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: RetrievalStage, _candidates: usize) {}
    fn on_candidate_result(&self, _stage: RetrievalStage, _url: &str, _outcome: &CandidateOutcome) {}
    fn on_stage_complete(&self, _stage: RetrievalStage) {}
}
