//! General web search through the DuckDuckGo HTML endpoint

use super::{check_status, request_error};
use async_trait::async_trait;
use psalter_application::{SearchError, SearchHit, SearchProvider, SearchProviderKind};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

static RESULT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.result").expect("result selector is valid"));
static RESULT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.result__a").expect("link selector is valid"));
static RESULT_SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result__snippet").expect("snippet selector is valid"));

pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoSearch {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn kind(&self) -> SearchProviderKind {
        SearchProviderKind::GeneralWeb
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(request_error)?;

        // The HTML endpoint answers 202 with a challenge page when throttling.
        if response.status().as_u16() == 202 {
            return Err(SearchError::RateLimited);
        }
        let response = check_status(response)?;
        let html = response.text().await.map_err(request_error)?;

        Ok(parse_results(&html, limit))
    }
}

/// Parse organic results from a DuckDuckGo HTML result page. Ads are skipped.
pub fn parse_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let mut hits = Vec::new();

    for result in document.select(&RESULT) {
        if hits.len() >= limit {
            break;
        }
        if result.value().classes().any(|c| c == "result--ad") {
            continue;
        }
        let Some(link) = result.select(&RESULT_LINK).next() else {
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(resolve_href) else {
            continue;
        };

        let mut hit = SearchHit::new(url);
        hit.title = collapse(&link.text().collect::<String>());
        if let Some(snippet) = result.select(&RESULT_SNIPPET).next() {
            hit.snippet = collapse(&snippet.text().collect::<String>());
        }
        hits.push(hit);
    }

    hits
}

/// Unwrap DuckDuckGo's redirect links (`//duckduckgo.com/l/?uddg=...`).
fn resolve_href(href: &str) -> Option<String> {
    let base = Url::parse("https://duckduckgo.com").ok()?;
    let url = base.join(href).ok()?;

    let target = if url.path() == "/l/" {
        let (_, target) = url.query_pairs().find(|(k, _)| k == "uddg")?;
        Url::parse(&target).ok()?
    } else {
        url
    };

    matches!(target.scheme(), "http" | "https").then(|| target.to_string())
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
