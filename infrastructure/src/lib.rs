//! Infrastructure layer for psalter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fallback;
pub mod ollama;
pub mod web;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnalysisConfig, FileAssistantConfig, FileConfig,
    FileOllamaConfig, FileOutputConfig, FileRetrievalConfig, FileSearchConfig,
};
pub use fallback::SampleLyricsCatalog;
pub use ollama::{OllamaError, OllamaGateway};
pub use web::{
    DuckDuckGoSearch, GeniusSearch, HtmlLyricExtractor, ReqwestPageFetcher, build_http_client,
};
