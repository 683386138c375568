//! Configuration file loading for psalter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PSALTER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./psalter.toml` or `./.psalter.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/psalter/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalysisConfig, FileAssistantConfig, FileConfig,
    FileOllamaConfig, FileOutputConfig, FileRetrievalConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
