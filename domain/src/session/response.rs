//! Typed interpretation of one assistant reply.
//!
//! A reply is either a final answer or a tool request. Tool requests are
//! recognised only when the reply holds a JSON object that deserializes into
//! a known [`ToolInvocation`]; anything else is a final answer.

use crate::tool::entities::ToolInvocation;
use crate::util::extract_json_object;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantTurn {
    Final(String),
    ToolRequest(ToolInvocation),
}

impl AssistantTurn {
    pub fn parse(reply: &str) -> Self {
        extract_json_object(reply)
            .and_then(|json| serde_json::from_str::<ToolInvocation>(json).ok())
            .map(AssistantTurn::ToolRequest)
            .unwrap_or_else(|| AssistantTurn::Final(reply.trim().to_string()))
    }

    pub fn is_final(&self) -> bool {
        matches!(self, AssistantTurn::Final(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_final() {
        let turn = AssistantTurn::parse("  This hymn celebrates grace.  ");
        assert_eq!(turn, AssistantTurn::Final("This hymn celebrates grace.".to_string()));
        assert!(turn.is_final());
    }

    #[test]
    fn test_tool_request_with_preamble() {
        let turn = AssistantTurn::parse(
            r#"I'll look that up. {"tool": "get_lyrics", "arguments": {"title": "Amazing Grace"}}"#,
        );
        assert_eq!(
            turn,
            AssistantTurn::ToolRequest(ToolInvocation::GetLyrics {
                title: "Amazing Grace".to_string(),
                artist: None,
            })
        );
    }

    #[test]
    fn test_unrelated_json_is_final() {
        let turn = AssistantTurn::parse(r#"{"themes": ["grace"]}"#);
        assert!(turn.is_final());
    }
}
