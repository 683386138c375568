//! Search domain: query phrasing, candidate URLs and host priority.

pub mod candidate;
pub mod query;

pub use candidate::{CandidateList, DomainPolicy, SearchResult};
pub use query::{QueryBuilder, SearchQuery, SearchStrategy};
