//! Retrieval configuration from TOML (`[retrieval]` and `[search]` sections)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetrievalConfig {
    pub fetch_timeout_seconds: u64,
    pub user_agent: String,
    pub max_search_results: usize,
    pub max_candidates_per_source: usize,
    pub min_lyrics_chars: usize,
    /// 0 disables the cap
    pub max_excerpt_chars: usize,
    pub allow_fallback: bool,
}

impl Default for FileRetrievalConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (LyricsBot)".to_string(),
            max_search_results: 10,
            max_candidates_per_source: 3,
            min_lyrics_chars: 100,
            max_excerpt_chars: 2000,
            allow_fallback: true,
        }
    }
}

/// Search stages and host policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Hosts containing any of these are tried first in web search
    pub priority_keywords: Vec<String>,
    /// Hosts containing any of these are never tried from web search
    pub blocked_hosts: Vec<String>,
    /// Enable the Genius lyrics search stage
    pub dedicated: bool,
    /// Enable the DuckDuckGo web search stage
    pub general: bool,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        let policy = psalter_domain::DomainPolicy::default();
        Self {
            priority_keywords: policy.priority_keywords,
            blocked_hosts: policy.blocked_hosts,
            dedicated: true,
            general: true,
        }
    }
}
