//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod fallback_provider;
pub mod llm_gateway;
pub mod lyric_extractor;
pub mod page_fetcher;
pub mod progress;
pub mod search_provider;
