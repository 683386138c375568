//! Model call parameters for analysis and the assistant loop.

use crate::ports::llm_gateway::SamplingOptions;
use psalter_domain::{DEFAULT_EXCERPT_CHARS, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for [`AnalyzeLyricsUseCase`](crate::use_cases::analyze_lyrics::AnalyzeLyricsUseCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    pub model: Model,
    pub sampling: SamplingOptions,
    /// Bound on one model call; a timeout yields an empty response.
    pub timeout: Duration,
    /// Lyric characters embedded in the prompt.
    pub excerpt_chars: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            sampling: SamplingOptions::default(),
            timeout: Duration::from_secs(30),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl AnalysisParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }
}

/// Parameters for [`RunAssistantUseCase`](crate::use_cases::run_assistant::RunAssistantUseCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantParams {
    pub model: Model,
    pub sampling: SamplingOptions,
    pub timeout: Duration,
    /// Hard cap on model round trips.
    pub max_iterations: usize,
}

impl Default for AssistantParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            sampling: SamplingOptions {
                temperature: 0.7,
                ..SamplingOptions::default()
            },
            timeout: Duration::from_secs(60),
            max_iterations: 5,
        }
    }
}

impl AssistantParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }
}
