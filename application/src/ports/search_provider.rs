//! Search provider port
//!
//! A search provider turns one query into an ordered list of hits. Calls may
//! fail or be rate limited; callers treat every failure as per-query.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Search returned HTTP {0}")]
    Status(u16),

    #[error("Search provider rate limited the request")]
    RateLimited,

    #[error("Could not parse search results: {0}")]
    Parse(String),
}

/// How a provider's results are treated by the search executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProviderKind {
    /// A lyrics-specific index; results are used as returned.
    Dedicated,
    /// General web search; results get the host-priority pass.
    GeneralWeb,
}

/// One raw search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            snippet: String::new(),
        }
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    fn kind(&self) -> SearchProviderKind;

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError>;
}
