//! Recovery of a structured analysis from free-form model output.
//!
//! Local models rarely answer with clean JSON. The parser takes the text
//! between the first `{` and the last `}`, and when that is not a JSON
//! object it falls back to a generic worship record. Field by field,
//! missing values get defaults so the caller always sees a complete
//! [`AnalysisResult`].

use super::entities::{AnalysisResult, UNKNOWN_ARTIST};
use crate::core::song::Song;
use crate::util::extract_json_object;
use serde_json::{Map, Value, json};

const UNKNOWN: &str = "Unknown";

/// Parse model output into a fully populated [`AnalysisResult`].
///
/// Never fails: malformed or empty output yields the default record.
pub fn parse_analysis_response(response: &str, song: &Song, raw_lyrics: &str) -> AnalysisResult {
    let object = extract_json_object(response)
        .and_then(|json| serde_json::from_str::<Value>(json).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_else(default_object);

    AnalysisResult {
        title: song.title().to_string(),
        artist: song.artist().unwrap_or(UNKNOWN_ARTIST).to_string(),
        themes: list_field(&object, "themes"),
        biblical_references: list_field(&object, "biblical_references"),
        worship_elements: list_field(&object, "worship_elements"),
        emotional_tone: scalar_field(&object, "emotional_tone"),
        service_placement: scalar_field(&object, "service_placement"),
        seasonal_appropriateness: list_field(&object, "seasonal_appropriateness"),
        complexity_level: scalar_field(&object, "complexity_level"),
        summary: scalar_field(&object, "summary"),
        raw_lyrics: raw_lyrics.to_string(),
    }
}

/// Placeholder record used when the model produced no usable object.
fn default_object() -> Map<String, Value> {
    let value = json!({
        "themes": ["Worship", "Praise"],
        "biblical_references": ["General worship themes"],
        "worship_elements": ["Congregational singing"],
        "emotional_tone": "Reverent",
        "service_placement": "Worship",
        "seasonal_appropriateness": ["Any season"],
        "complexity_level": "Simple",
        "summary": "Analysis extracted from non-JSON response"
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Lists accept a bare string as a single item; non-scalar items are skipped.
fn list_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(json_value_to_string).collect(),
        Some(other) => json_value_to_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn scalar_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(json_value_to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn json_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
