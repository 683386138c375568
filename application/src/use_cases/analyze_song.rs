//! Analyze Song use case
//!
//! Retrieval followed by analysis: the full pipeline behind the CLI.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::lyric_extractor::LyricExtractor;
use crate::ports::page_fetcher::PageFetcher;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::analyze_lyrics::AnalyzeLyricsUseCase;
use crate::use_cases::retrieve_lyrics::{RetrieveLyricsError, RetrieveLyricsUseCase};
use psalter_domain::{AnalysisResult, RetrievedLyrics, Song};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Analysis together with the lyrics it was based on.
#[derive(Debug, Clone, Serialize)]
pub struct SongAnalysis {
    pub analysis: AnalysisResult,
    pub lyrics: RetrievedLyrics,
}

impl SongAnalysis {
    /// True when the analysis ran on sample text.
    pub fn is_synthetic(&self) -> bool {
        self.lyrics.is_synthetic()
    }
}

pub struct AnalyzeSongUseCase<G, F, E>
where
    G: LlmGateway + 'static,
    F: PageFetcher + 'static,
    E: LyricExtractor + 'static,
{
    retrieve: Arc<RetrieveLyricsUseCase<F, E>>,
    analyze: AnalyzeLyricsUseCase<G>,
}

impl<G, F, E> AnalyzeSongUseCase<G, F, E>
where
    G: LlmGateway + 'static,
    F: PageFetcher + 'static,
    E: LyricExtractor + 'static,
{
    pub fn new(retrieve: Arc<RetrieveLyricsUseCase<F, E>>, analyze: AnalyzeLyricsUseCase<G>) -> Self {
        Self { retrieve, analyze }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, song: &Song) -> Result<SongAnalysis, RetrieveLyricsError> {
        self.execute_with_progress(song, &NoProgress).await
    }

    /// Fails only when retrieval fails with the fallback disabled.
    pub async fn execute_with_progress(
        &self,
        song: &Song,
        progress: &dyn ProgressNotifier,
    ) -> Result<SongAnalysis, RetrieveLyricsError> {
        let lyrics = self.retrieve.execute_with_progress(song, progress).await?;

        progress.on_analysis_start(&self.analyze.params().model);
        let analysis = self.analyze.execute(song, &lyrics.text).await;
        progress.on_analysis_complete();

        info!("Analysis complete for {}", song);
        Ok(SongAnalysis { analysis, lyrics })
    }
}
