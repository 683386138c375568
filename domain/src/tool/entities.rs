//! Tool definitions and typed invocations for the lyrics assistant.

use serde::{Deserialize, Serialize};

/// Definition of a tool advertised to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_lyrics")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// The lyrics lookup tool backed by the retrieval cascade.
    pub fn get_lyrics() -> Self {
        Self::new(
            ToolInvocation::GET_LYRICS,
            "Search the web for the lyrics of a worship song and return the lyric text",
        )
        .with_parameter(ToolParameter::new("title", "Song title", true))
        .with_parameter(ToolParameter::new("artist", "Artist or author name", false))
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }
}

/// A tool request with typed arguments.
///
/// Wire shape: `{"tool": "get_lyrics", "arguments": {"title": "...", "artist": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "arguments", rename_all = "snake_case")]
pub enum ToolInvocation {
    GetLyrics {
        title: String,
        #[serde(default)]
        artist: Option<String>,
    },
}

impl ToolInvocation {
    pub const GET_LYRICS: &'static str = "get_lyrics";

    pub fn name(&self) -> &'static str {
        match self {
            ToolInvocation::GetLyrics { .. } => Self::GET_LYRICS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_lyrics_definition() {
        let def = ToolDefinition::get_lyrics();
        assert_eq!(def.name, "get_lyrics");
        assert_eq!(def.parameters.len(), 2);
        assert!(def.parameters[0].required);
        assert!(!def.parameters[1].required);
        assert!(def.parameters.iter().all(|p| p.param_type == "string"));
    }

    #[test]
    fn test_invocation_from_json() {
        let invocation: ToolInvocation = serde_json::from_str(
            r#"{"tool": "get_lyrics", "arguments": {"title": "Amazing Grace", "artist": "John Newton"}}"#,
        )
        .unwrap();
        assert_eq!(
            invocation,
            ToolInvocation::GetLyrics {
                title: "Amazing Grace".to_string(),
                artist: Some("John Newton".to_string()),
            }
        );
        assert_eq!(invocation.name(), "get_lyrics");
    }

    #[test]
    fn test_invocation_artist_optional() {
        let invocation: ToolInvocation =
            serde_json::from_str(r#"{"tool": "get_lyrics", "arguments": {"title": "Amazing Grace"}}"#)
                .unwrap();
        assert!(matches!(invocation, ToolInvocation::GetLyrics { artist: None, .. }));
    }

    #[test]
    fn test_unknown_tool_rejected() {
        assert!(
            serde_json::from_str::<ToolInvocation>(r#"{"tool": "rm_rf", "arguments": {}}"#).is_err()
        );
    }
}
