//! Dedicated lyrics search against Genius
//!
//! Uses the public multi-search endpoint the Genius web app calls, which
//! returns JSON sections of typed hits. Only song hits with a `-lyrics`
//! page URL are kept.

use super::{check_status, request_error};
use async_trait::async_trait;
use psalter_application::{SearchError, SearchHit, SearchProvider, SearchProviderKind};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

const DEFAULT_BASE_URL: &str = "https://genius.com";

static LYRICS_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/[^?#]*-lyrics$").expect("lyrics page pattern is valid"));

#[derive(Debug, Deserialize)]
struct MultiSearchResponse {
    response: MultiSearchPayload,
}

#[derive(Debug, Deserialize)]
struct MultiSearchPayload {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(default, rename = "type")]
    hit_type: String,
    result: HitResult,
}

#[derive(Debug, Deserialize)]
struct HitResult {
    #[serde(default)]
    url: String,
    #[serde(default)]
    full_title: String,
}

pub struct GeniusSearch {
    client: reqwest::Client,
    base_url: String,
}

impl GeniusSearch {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for GeniusSearch {
    fn name(&self) -> &str {
        "genius"
    }

    fn kind(&self) -> SearchProviderKind {
        SearchProviderKind::Dedicated
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        let endpoint = format!("{}/api/search/multi", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response)?;
        let body = response.text().await.map_err(request_error)?;

        parse_results(&body, limit)
    }
}

/// Collect song pages from a multi-search response, in section order.
pub fn parse_results(body: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
    let payload: MultiSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    let hits = payload
        .response
        .sections
        .into_iter()
        .flat_map(|section| section.hits)
        .filter(|hit| hit.hit_type.eq_ignore_ascii_case("song"))
        .filter(|hit| LYRICS_PAGE.is_match(&hit.result.url))
        .filter(|hit| seen.insert(hit.result.url.clone()))
        .take(limit)
        .map(|hit| {
            let mut search_hit = SearchHit::new(hit.result.url);
            search_hit.title = hit.result.full_title;
            search_hit
        })
        .collect();

    Ok(hits)
}
