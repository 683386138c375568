//! Worship analysis: request construction and response recovery.

pub mod entities;
pub mod parser;

pub use entities::{AnalysisRequest, AnalysisResult, DEFAULT_EXCERPT_CHARS, UNKNOWN_ARTIST};
pub use parser::parse_analysis_response;
