//! Search results, candidate deduplication and domain priority.

use super::query::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// A single hit returned by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub strategy: SearchStrategy,
    /// Position within the strategy's result page (0-based).
    pub rank: usize,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, strategy: SearchStrategy, rank: usize) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            snippet: String::new(),
            strategy,
            rank,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }
}

/// Ordered URLs where each appears at most once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a URL unless it is already present. Returns true when added.
    pub fn push(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl FromIterator<String> for CandidateList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = CandidateList::new();
        for url in iter {
            list.push(url);
        }
        list
    }
}

/// Host keyword policy applied to general web search results.
///
/// Allow-listed hosts are promoted to the front (stable), deny-listed hosts
/// are dropped. Everything else keeps its relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPolicy {
    pub priority_keywords: Vec<String>,
    pub blocked_hosts: Vec<String>,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            priority_keywords: ["hymnary", "cyberhymnal", "worship", "christian", "gospel", "hymn"]
                .into_iter()
                .map(String::from)
                .collect(),
            blocked_hosts: ["spotify", "apple", "youtube", "soundcloud", "bandcamp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl DomainPolicy {
    pub fn is_blocked(&self, url: &str) -> bool {
        host_matches(url, &self.blocked_hosts)
    }

    pub fn is_priority(&self, url: &str) -> bool {
        host_matches(url, &self.priority_keywords)
    }

    /// Drop blocked hosts, then stably move priority hosts to the front.
    pub fn reorder(&self, list: CandidateList) -> CandidateList {
        let (priority, rest): (Vec<String>, Vec<String>) = list
            .into_vec()
            .into_iter()
            .filter(|url| !self.is_blocked(url))
            .partition(|url| self.is_priority(url));
        priority.into_iter().chain(rest).collect()
    }
}

fn host_matches(url: &str, keywords: &[String]) -> bool {
    let Some(host) = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
    else {
        return false;
    };
    keywords
        .iter()
        .any(|keyword| host.contains(&keyword.to_lowercase()))
}
