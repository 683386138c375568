//! Web adapters: HTTP client, page fetching, lyric extraction and search

pub mod client;
pub mod extract;
pub mod fetch;
pub mod search;

pub use client::build_http_client;
pub use extract::HtmlLyricExtractor;
pub use fetch::ReqwestPageFetcher;
pub use search::{DuckDuckGoSearch, GeniusSearch};
