//! Ollama configuration from TOML (`[ollama]` section)

use serde::{Deserialize, Serialize};

/// Raw Ollama server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
    pub model: String,
    /// Timeout for one analysis call
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub top_p: f32,
    /// Maps to Ollama's `num_predict`
    pub max_tokens: u32,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            timeout_seconds: 30,
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 500,
        }
    }
}

/// `[analysis]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Lyric characters embedded in the analysis prompt
    pub excerpt_chars: usize,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: 1000,
        }
    }
}

/// `[assistant]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    pub max_iterations: usize,
    pub timeout_seconds: u64,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            timeout_seconds: 60,
        }
    }
}
