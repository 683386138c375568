//! Domain layer for psalter
//!
//! This crate contains the core lyric-retrieval heuristics, analysis
//! entities and value objects. It has no dependencies on infrastructure or
//! presentation concerns: no I/O, no async.
//!
//! # Core Concepts
//!
//! ## Retrieval cascade
//!
//! - **Query building**: ordered search phrasings and guessed known-host URLs
//! - **Candidates**: deduplicated URLs, host-priority reordered for web search
//! - **Extraction**: structured container pass, then a whole-page fallback pass
//!
//! ## Analysis
//!
//! - **Prompt**: fixed-shape request with a capped lyric excerpt
//! - **Recovery**: JSON located in free-form output, defaults per field

pub mod analysis;
pub mod config;
pub mod core;
pub mod lyrics;
pub mod prompt;
pub mod search;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    AnalysisRequest, AnalysisResult, DEFAULT_EXCERPT_CHARS, UNKNOWN_ARTIST, parse_analysis_response,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, song::Song};
pub use lyrics::{
    CandidateOutcome, ExtractionPass, ExtractionPolicy, LyricCandidate, LyricSource,
    RetrievalStage, RetrievedLyrics, WorshipAffinity,
};
pub use prompt::PromptTemplate;
pub use search::{CandidateList, DomainPolicy, QueryBuilder, SearchQuery, SearchResult, SearchStrategy};
pub use session::{AssistantTurn, Message, Role};
pub use tool::{ToolDefinition, ToolInvocation, ToolParameter};
