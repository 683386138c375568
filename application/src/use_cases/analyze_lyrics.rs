//! Analyze Lyrics use case
//!
//! Builds the analysis prompt, calls the model under a timeout and recovers
//! a complete [`AnalysisResult`] from whatever comes back.

use crate::config::AnalysisParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use psalter_domain::{AnalysisRequest, AnalysisResult, Song, parse_analysis_response};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AnalyzeLyricsUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    params: AnalysisParams,
}

impl<G: LlmGateway + 'static> AnalyzeLyricsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: AnalysisParams::default(),
        }
    }

    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Analyze lyrics; never fails.
    pub async fn execute(&self, song: &Song, lyrics: &str) -> AnalysisResult {
        let request = AnalysisRequest::new(song.clone(), lyrics, self.params.excerpt_chars);
        let response = self.request(&request).await;
        parse_analysis_response(&response, song, lyrics)
    }

    /// Send the prompt; failures and timeouts become an empty response.
    pub async fn request(&self, request: &AnalysisRequest) -> String {
        debug!(
            "Requesting analysis of {} from {} ({} excerpt chars)",
            request.song,
            self.params.model,
            request.excerpt.chars().count()
        );

        let call = self
            .gateway
            .generate(&self.params.model, &request.prompt, &self.params.sampling);
        let result = match tokio::time::timeout(self.params.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        };

        match result {
            Ok(text) => {
                debug!("Model response: {}", psalter_domain::util::truncate_str(&text, 200));
                text
            }
            Err(e) => {
                warn!("Analysis request to {} failed: {}", self.params.model, e);
                String::new()
            }
        }
    }
}
