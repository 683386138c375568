//! Prompt templates for analysis and the lyrics assistant

use crate::tool::entities::ToolDefinition;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed-shape analysis prompt. `excerpt` is expected to be capped already.
    pub fn analysis(title: &str, artist: Option<&str>, excerpt: &str) -> String {
        let artist_line = artist
            .map(|a| format!("Artist: {}\n", a))
            .unwrap_or_default();
        format!(
            r#"Analyze this worship song and respond with valid JSON only:

Song: {title}
{artist_line}Lyrics: {excerpt}

Return JSON with:
{{"themes": ["theme1", "theme2"], "biblical_references": ["ref1"], "worship_elements": ["element1"], "emotional_tone": "word", "service_placement": "placement", "seasonal_appropriateness": ["season1"], "complexity_level": "Simple", "summary": "Brief summary"}}"#
        )
    }

    /// System prompt for the tool-using assistant.
    pub fn assistant_system(tools: &[ToolDefinition]) -> String {
        let mut prompt = String::from(
            "You are a worship song analysis assistant. You have access to these tools:\n",
        );
        for tool in tools {
            prompt.push_str(&format!("- {}: {}\n", tool.name, tool.description));
            for param in &tool.parameters {
                let required = if param.required { "required" } else { "optional" };
                prompt.push_str(&format!(
                    "    {} ({}, {}): {}\n",
                    param.name, param.param_type, required, param.description
                ));
            }
        }
        prompt.push_str(
            r#"
When you need a tool, reply with a single JSON object and nothing else:
{"tool": "<tool name>", "arguments": {...}}
Otherwise answer the user directly in plain text."#,
        );
        prompt
    }

    /// Opening request for analyzing one song through the assistant.
    pub fn assistant_request(title: &str, artist: Option<&str>) -> String {
        let song = match artist {
            Some(artist) => format!("'{}' by {}", title, artist),
            None => format!("'{}'", title),
        };
        format!(
            "Please analyze the worship song {song}. First get the lyrics, then provide insights about themes, biblical references, and worship planning recommendations."
        )
    }

    pub fn tool_result(tool_name: &str, output: &str) -> String {
        format!("Tool result from {}:\n{}", tool_name, output)
    }

    pub fn analyze_followup() -> &'static str {
        "Now please analyze these lyrics."
    }
}
