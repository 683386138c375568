//! Analysis request and result entities.

use crate::core::song::Song;
use crate::prompt::PromptTemplate;
use crate::util::truncate_chars;
use serde::{Deserialize, Serialize};

/// Artist recorded when the request named none.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Default lyric cap embedded in the analysis prompt.
pub const DEFAULT_EXCERPT_CHARS: usize = 1000;

/// Structured worship analysis of one song.
///
/// Every field is always populated; missing model output is replaced by
/// defaults in [`parse_analysis_response`](super::parser::parse_analysis_response).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    /// [`UNKNOWN_ARTIST`] when the request named no artist.
    pub artist: String,
    pub themes: Vec<String>,
    pub biblical_references: Vec<String>,
    pub worship_elements: Vec<String>,
    pub emotional_tone: String,
    pub service_placement: String,
    pub seasonal_appropriateness: Vec<String>,
    pub complexity_level: String,
    pub summary: String,
    pub raw_lyrics: String,
}

/// The prompt payload for one analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub song: Song,
    /// Lyrics truncated to the excerpt cap.
    pub excerpt: String,
    pub prompt: String,
}

impl AnalysisRequest {
    pub fn new(song: Song, lyrics: &str, excerpt_chars: usize) -> Self {
        let excerpt = truncate_chars(lyrics, excerpt_chars).to_string();
        let prompt = PromptTemplate::analysis(song.title(), song.artist(), &excerpt);
        Self {
            song,
            excerpt,
            prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_caps_excerpt() {
        let song = Song::try_new("Amazing Grace", None::<String>).unwrap();
        let lyrics = "grace ".repeat(500);
        let request = AnalysisRequest::new(song, &lyrics, DEFAULT_EXCERPT_CHARS);
        assert_eq!(request.excerpt.chars().count(), 1000);
        assert!(request.prompt.contains("Song: Amazing Grace"));
        assert!(!request.prompt.contains(&lyrics));
    }
}
