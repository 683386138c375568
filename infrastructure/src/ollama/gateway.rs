//! LLM gateway backed by a local Ollama server

use super::error::OllamaError;
use super::protocol::{
    ChatRequest, ChatResponse, ErrorResponse, GenerateRequest, GenerateResponse,
};
use async_trait::async_trait;
use psalter_application::{GatewayError, LlmGateway, SamplingOptions};
use psalter_domain::{Message, Model};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    /// Uses its own client; callers bound each call with their timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, OllamaError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(OllamaError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))
    }
}

impl Default for OllamaGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
        options: &SamplingOptions,
    ) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: model.as_str(),
            prompt,
            stream: false,
            options: options.into(),
        };
        let response: GenerateResponse = self.post("/api/generate", &request).await?;
        Ok(response.response)
    }

    async fn chat(
        &self,
        model: &Model,
        messages: &[Message],
        options: &SamplingOptions,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages,
            stream: false,
            options: options.into(),
        };
        let response: ChatResponse = self.post("/api/chat", &request).await?;
        Ok(response.message.content)
    }
}
