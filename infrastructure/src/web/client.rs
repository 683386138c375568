//! Shared HTTP client construction

use std::time::Duration;

/// Build the HTTP client used for one invocation.
///
/// Every request made through it carries the identifying user agent and
/// the per-request timeout. Connections are pooled for the client's
/// lifetime and released when it is dropped.
pub fn build_http_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}
