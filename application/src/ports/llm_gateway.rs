//! LLM Gateway port
//!
//! Defines the interface for communicating with the local model server.

use async_trait::async_trait;
use psalter_domain::{Message, Model};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Sampling settings sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub top_p: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl Default for SamplingOptions {
    /// Low-randomness settings used for analysis.
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 500,
        }
    }
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer. Callers
/// apply their own timeout around each call.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Single-prompt completion.
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
        options: &SamplingOptions,
    ) -> Result<String, GatewayError>;

    /// Multi-turn chat completion; returns the assistant reply text.
    async fn chat(
        &self,
        model: &Model,
        messages: &[Message],
        options: &SamplingOptions,
    ) -> Result<String, GatewayError>;
}
