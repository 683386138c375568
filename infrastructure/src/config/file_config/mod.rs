//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! parameters at wiring time.

mod ollama;
mod retrieval;

pub use ollama::{FileAnalysisConfig, FileAssistantConfig, FileOllamaConfig};
pub use retrieval::{FileRetrievalConfig, FileSearchConfig};

use psalter_application::{AnalysisParams, AssistantParams, RetrievalParams, SamplingOptions};
use psalter_domain::{DomainPolicy, ExtractionPolicy, Model, OutputFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("extraction.selectors cannot be empty")]
    NoSelectors,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Report,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ollama: FileOllamaConfig,
    pub retrieval: FileRetrievalConfig,
    pub search: FileSearchConfig,
    /// Selector list and thresholds for lyric extraction
    pub extraction: ExtractionPolicy,
    pub analysis: FileAnalysisConfig,
    pub assistant: FileAssistantConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate values that would make the cascade or the model call unusable.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.ollama.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        let non_zero = [
            ("ollama.timeout_seconds", self.ollama.timeout_seconds as usize),
            ("retrieval.fetch_timeout_seconds", self.retrieval.fetch_timeout_seconds as usize),
            ("retrieval.max_candidates_per_source", self.retrieval.max_candidates_per_source),
            ("analysis.excerpt_chars", self.analysis.excerpt_chars),
            ("assistant.max_iterations", self.assistant.max_iterations),
        ];
        if let Some((name, _)) = non_zero.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigValidationError::ZeroValue(name));
        }
        if self.extraction.selectors.is_empty() {
            return Err(ConfigValidationError::NoSelectors);
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn model(&self) -> Model {
        self.ollama.model.parse().unwrap_or_default()
    }

    pub fn sampling(&self) -> SamplingOptions {
        SamplingOptions {
            temperature: self.ollama.temperature,
            top_p: self.ollama.top_p,
            max_tokens: self.ollama.max_tokens,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.retrieval.fetch_timeout_seconds)
    }

    pub fn retrieval_params(&self) -> RetrievalParams {
        let r = &self.retrieval;
        RetrievalParams::default()
            .with_max_search_results(r.max_search_results)
            .with_max_candidates_per_source(r.max_candidates_per_source)
            .with_min_lyrics_chars(r.min_lyrics_chars)
            .with_max_excerpt_chars((r.max_excerpt_chars > 0).then_some(r.max_excerpt_chars))
            .with_fallback(r.allow_fallback)
            .with_domain_policy(DomainPolicy {
                priority_keywords: self.search.priority_keywords.clone(),
                blocked_hosts: self.search.blocked_hosts.clone(),
            })
    }

    pub fn analysis_params(&self) -> AnalysisParams {
        AnalysisParams::default()
            .with_model(self.model())
            .with_sampling(self.sampling())
            .with_timeout(Duration::from_secs(self.ollama.timeout_seconds))
            .with_excerpt_chars(self.analysis.excerpt_chars)
    }

    pub fn assistant_params(&self) -> AssistantParams {
        AssistantParams::default()
            .with_model(self.model())
            .with_timeout(Duration::from_secs(self.assistant.timeout_seconds))
            .with_max_iterations(self.assistant.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.output.format, OutputFormat::Report);
        assert_eq!(config.extraction.min_block_lines, 10);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.ollama.model, "llama3.2");
        assert_eq!(config.extraction.selectors.len(), 11);
    }

    #[test]
    fn test_validate_rejects_zero_and_empty() {
        let mut config = FileConfig::default();
        config.assistant.max_iterations = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroValue("assistant.max_iterations"))
        );

        let mut config = FileConfig::default();
        config.ollama.model = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = FileConfig::default();
        config.extraction.selectors.clear();
        assert_eq!(config.validate(), Err(ConfigValidationError::NoSelectors));
    }

    #[test]
    fn test_extraction_overrides() {
        let toml_str = r#"
[extraction]
selectors = [".lyrics-body", "pre"]
min_filtered_lines = 6
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.extraction.selectors, vec![".lyrics-body", "pre"]);
        assert_eq!(config.extraction.min_filtered_lines, 6);
        assert_eq!(config.extraction.min_block_lines, 10);
    }

    #[test]
    fn test_conversions() {
        let toml_str = r#"
[ollama]
model = "mistral"
temperature = 0.1

[retrieval]
max_excerpt_chars = 0
allow_fallback = false

[search]
priority_keywords = ["hymn"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();

        let retrieval = config.retrieval_params();
        assert!(retrieval.max_excerpt_chars.is_none());
        assert!(!retrieval.allow_fallback);
        assert_eq!(retrieval.domain_policy.priority_keywords, vec!["hymn"]);

        let analysis = config.analysis_params();
        assert_eq!(analysis.model.as_str(), "mistral");
        assert_eq!(analysis.sampling.temperature, 0.1);
        assert_eq!(analysis.timeout, Duration::from_secs(30));

        assert_eq!(config.assistant_params().max_iterations, 5);
    }

    #[test]
    fn test_output_format_deserialize() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\ncolor = false\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_to_toml_renders_sections() {
        let mut config = FileConfig::default();
        config.ollama.model = "mistral".to_string();
        let rendered = config.to_toml().unwrap();

        assert!(rendered.contains("[ollama]"));
        assert!(rendered.contains("[extraction]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.ollama.model, "mistral");
    }
}
