//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RetrievalParams`]: cascade caps, acceptance length, fallback switch
//! - [`AnalysisParams`] / [`AssistantParams`]: model, sampling and timeouts

pub mod analysis_params;
pub mod retrieval_params;

pub use analysis_params::{AnalysisParams, AssistantParams};
pub use retrieval_params::RetrievalParams;
