//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the Ollama model used for analysis
//! - [`song::Song`]: a validated title with an optional artist
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod song;
