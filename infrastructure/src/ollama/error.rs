//! Error types for the Ollama adapter

use psalter_application::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Cannot reach Ollama at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl OllamaError {
    pub(crate) fn from_reqwest(base_url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Unreachable {
                url: base_url.to_string(),
                message: e.to_string(),
            }
        } else if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Unreachable { .. } => GatewayError::ConnectionError(e.to_string()),
            OllamaError::Timeout => GatewayError::Timeout,
            OllamaError::Parse(_) => GatewayError::InvalidResponse(e.to_string()),
            OllamaError::Status { .. } | OllamaError::Http(_) => {
                GatewayError::RequestFailed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_mapping() {
        assert!(matches!(
            GatewayError::from(OllamaError::Timeout),
            GatewayError::Timeout
        ));
        assert!(matches!(
            GatewayError::from(OllamaError::Status {
                status: 404,
                message: "model 'x' not found".into()
            }),
            GatewayError::RequestFailed(m) if m.contains("404")
        ));
        assert!(matches!(
            GatewayError::from(OllamaError::Unreachable {
                url: "http://localhost:11434".into(),
                message: "refused".into()
            }),
            GatewayError::ConnectionError(_)
        ));
    }
}
