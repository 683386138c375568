//! Page fetcher port

use async_trait::async_trait;

/// Result of fetching one candidate URL.
///
/// Failures are values: `content` is `None` for non-2xx responses,
/// timeouts and connection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    /// HTTP status when a response was received.
    pub status: Option<u16>,
    pub content: Option<String>,
}

impl FetchedPage {
    pub fn ok(url: impl Into<String>, status: u16, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            content: Some(content.into()),
        }
    }

    pub fn failed(url: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            url: url.into(),
            status,
            content: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.content.is_some() && self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

/// Retrieves raw page content under the adapter's timeout and request headers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Never fails; see [`FetchedPage`].
    async fn fetch(&self, url: &str) -> FetchedPage;
}
