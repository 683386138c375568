//! Retrieval parameters: cascade control.
//!
//! [`RetrievalParams`] groups the static knobs of
//! [`RetrieveLyricsUseCase`](crate::use_cases::retrieve_lyrics::RetrieveLyricsUseCase).

use psalter_domain::DomainPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Overall result cap per search stage, divided across its queries.
    pub max_search_results: usize,
    /// Search candidates tried per stage.
    pub max_candidates_per_source: usize,
    /// Extracted text must be longer than this to be accepted.
    pub min_lyrics_chars: usize,
    /// Accepted live lyrics are truncated to this many characters.
    pub max_excerpt_chars: Option<usize>,
    /// Return sample lyrics when every live source fails.
    pub allow_fallback: bool,
    /// Host priority applied to general web search.
    pub domain_policy: DomainPolicy,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            max_search_results: 10,
            max_candidates_per_source: 3,
            min_lyrics_chars: 100,
            max_excerpt_chars: Some(2000),
            allow_fallback: true,
            domain_policy: DomainPolicy::default(),
        }
    }
}

impl RetrievalParams {
    // ==================== Builder Methods ====================

    pub fn with_max_search_results(mut self, max: usize) -> Self {
        self.max_search_results = max;
        self
    }

    pub fn with_max_candidates_per_source(mut self, max: usize) -> Self {
        self.max_candidates_per_source = max;
        self
    }

    pub fn with_min_lyrics_chars(mut self, min: usize) -> Self {
        self.min_lyrics_chars = min;
        self
    }

    pub fn with_max_excerpt_chars(mut self, max: Option<usize>) -> Self {
        self.max_excerpt_chars = max;
        self
    }

    pub fn with_fallback(mut self, allow: bool) -> Self {
        self.allow_fallback = allow;
        self
    }

    pub fn with_domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.domain_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RetrievalParams::default();
        assert_eq!(params.max_search_results, 10);
        assert_eq!(params.max_candidates_per_source, 3);
        assert_eq!(params.min_lyrics_chars, 100);
        assert!(params.allow_fallback);
    }

    #[test]
    fn test_builder() {
        let params = RetrievalParams::default()
            .with_fallback(false)
            .with_max_candidates_per_source(6)
            .with_max_excerpt_chars(None);
        assert!(!params.allow_fallback);
        assert_eq!(params.max_candidates_per_source, 6);
        assert!(params.max_excerpt_chars.is_none());
    }
}
