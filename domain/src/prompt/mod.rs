//! Prompt domain
//!
//! Templates for the analysis prompt and the lyrics assistant conversation.

mod template;

pub use template::PromptTemplate;
