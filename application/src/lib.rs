//! Application layer for psalter
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisParams, AssistantParams, RetrievalParams};
pub use ports::{
    fallback_provider::FallbackProvider,
    llm_gateway::{GatewayError, LlmGateway, SamplingOptions},
    lyric_extractor::LyricExtractor,
    page_fetcher::{FetchedPage, PageFetcher},
    progress::{NoProgress, ProgressNotifier},
    search_provider::{SearchError, SearchHit, SearchProvider, SearchProviderKind},
};
pub use use_cases::analyze_lyrics::AnalyzeLyricsUseCase;
pub use use_cases::analyze_song::{AnalyzeSongUseCase, SongAnalysis};
pub use use_cases::retrieve_lyrics::{RetrieveLyricsError, RetrieveLyricsUseCase};
pub use use_cases::run_assistant::{AssistantOutput, RunAssistantError, RunAssistantUseCase};
pub use use_cases::search_candidates::SearchExecutor;
