//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Report,
    /// JSON record
    Json,
}

impl From<OutputFormat> for psalter_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Report => psalter_domain::OutputFormat::Report,
            OutputFormat::Json => psalter_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for psalter
#[derive(Parser, Debug)]
#[command(name = "psalter")]
#[command(author, version, about = "Find worship song lyrics and analyze them with a local LLM")]
#[command(long_about = r#"
Psalter finds lyrics for a worship song on the open web and asks a local
Ollama model for a structured analysis: themes, biblical references,
worship elements, tone and service placement.

Lyrics are tried from known lyric hosts, then a lyrics search, then a
general web search. When nothing usable is found, built-in sample text
is analyzed instead and the report says so.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./psalter.toml      Project-level config
3. ~/.config/psalter/config.toml   Global config

Example:
  psalter "Amazing Grace" "John Newton"
  psalter "How Great Thou Art" --json
  psalter "Blessed Be Your Name" -m mistral --no-fallback
  psalter --assistant "Cornerstone" Hillsong
"#)]
pub struct Cli {
    /// Song title
    #[arg(required_unless_present = "show_config")]
    pub title: Option<String>,

    /// Artist name (enables direct lyric-host lookups)
    pub artist: Option<String>,

    /// Output as JSON (same as `--output json`)
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Ollama model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Fail instead of analyzing sample lyrics when no lyrics are found
    #[arg(long)]
    pub no_fallback: bool,

    /// Let the model fetch lyrics through its tool instead of the fixed pipeline
    #[arg(long)]
    pub assistant: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Format chosen on the command line, if any.
    pub fn output_format(&self) -> Option<psalter_domain::OutputFormat> {
        if self.json {
            Some(psalter_domain::OutputFormat::Json)
        } else {
            self.output.map(Into::into)
        }
    }
}
