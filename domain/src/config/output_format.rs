//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable worship analysis report (default)
    #[default]
    Report,
    /// Pretty-printed JSON record
    Json,
}
