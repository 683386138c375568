//! Page fetcher backed by reqwest

use async_trait::async_trait;
use psalter_application::{FetchedPage, PageFetcher};
use tracing::debug;

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Fetches candidate pages with the invocation's shared client.
///
/// Non-2xx responses, timeouts, connection failures and oversized bodies
/// all come back as a failed [`FetchedPage`].
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
}

impl ReqwestPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> FetchedPage {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() {
                    debug!("Timed out fetching {}", url);
                } else {
                    debug!("Failed to fetch {}: {}", url, e);
                }
                return FetchedPage::failed(url, None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(
                "HTTP error for {}: {} {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return FetchedPage::failed(url, Some(status.as_u16()));
        }

        if response.content_length().unwrap_or(0) > MAX_BODY_SIZE as u64 {
            debug!("Response from {} too large", url);
            return FetchedPage::failed(url, Some(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) if body.len() <= MAX_BODY_SIZE => FetchedPage::ok(
                url,
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ),
            Ok(body) => {
                debug!("Response from {} too large: {} bytes", url, body.len());
                FetchedPage::failed(url, Some(status.as_u16()))
            }
            Err(e) => {
                debug!("Failed to read body of {}: {}", url, e);
                FetchedPage::failed(url, Some(status.as_u16()))
            }
        }
    }
}
