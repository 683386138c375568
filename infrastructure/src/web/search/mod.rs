//! Search provider adapters

pub mod duckduckgo;
pub mod genius;

pub use duckduckgo::DuckDuckGoSearch;
pub use genius::GeniusSearch;

use psalter_application::SearchError;
use reqwest::StatusCode;

fn request_error(e: reqwest::Error) -> SearchError {
    SearchError::Request(e.to_string())
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SearchError> {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err(SearchError::RateLimited),
        status if status.is_success() => Ok(response),
        status => Err(SearchError::Status(status.as_u16())),
    }
}
