//! Search executor: runs queries against one provider and builds candidates.

use crate::ports::search_provider::{SearchProvider, SearchProviderKind};
use psalter_domain::{CandidateList, DomainPolicy, SearchQuery, SearchResult};
use tracing::{debug, warn};

/// Runs every query sequentially against a provider.
///
/// A failing query is logged and skipped; the remaining queries still run.
pub struct SearchExecutor<'a> {
    provider: &'a dyn SearchProvider,
    policy: &'a DomainPolicy,
}

impl<'a> SearchExecutor<'a> {
    pub fn new(provider: &'a dyn SearchProvider, policy: &'a DomainPolicy) -> Self {
        Self { provider, policy }
    }

    /// Overall cap divided across queries, rounded up.
    pub fn per_query_limit(max_results: usize, queries: usize) -> usize {
        max_results.div_ceil(queries.max(1)).max(1)
    }

    /// All hits in query order, tagged with strategy and rank.
    pub async fn results(&self, queries: &[SearchQuery], max_results: usize) -> Vec<SearchResult> {
        let limit = Self::per_query_limit(max_results, queries.len());
        let mut results = Vec::new();

        for query in queries {
            match self.provider.search(&query.text, limit).await {
                Ok(hits) if hits.is_empty() => {
                    debug!(
                        "{} returned no results for '{}'",
                        self.provider.name(),
                        query.text
                    );
                }
                Ok(hits) => {
                    debug!(
                        "{} returned {} results for '{}'",
                        self.provider.name(),
                        hits.len(),
                        query.text
                    );
                    results.extend(hits.into_iter().take(limit).enumerate().map(
                        |(rank, hit)| {
                            SearchResult::new(hit.url, query.strategy, rank)
                                .with_title(hit.title)
                                .with_snippet(hit.snippet)
                        },
                    ));
                }
                Err(e) => {
                    warn!(
                        "{} search failed for '{}' ({}): {}",
                        self.provider.name(),
                        query.text,
                        query.strategy,
                        e
                    );
                }
            }
        }

        results
    }

    /// Deduplicated candidate URLs; general web results get the host-priority pass.
    pub async fn candidates(&self, queries: &[SearchQuery], max_results: usize) -> CandidateList {
        let list: CandidateList = self
            .results(queries, max_results)
            .await
            .into_iter()
            .map(|result| result.url)
            .collect();

        match self.provider.kind() {
            SearchProviderKind::Dedicated => list,
            SearchProviderKind::GeneralWeb => self.policy.reorder(list),
        }
    }
}
