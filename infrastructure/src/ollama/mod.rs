//! Ollama adapter
//!
//! Implements [`LlmGateway`](psalter_application::LlmGateway) over Ollama's
//! non-streaming `/api/generate` and `/api/chat` endpoints.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::OllamaError;
pub use gateway::{DEFAULT_BASE_URL, OllamaGateway};
