//! Retrieval cascade value objects.

use super::affinity::WorshipAffinity;
use serde::{Deserialize, Serialize};

/// A stage of the retrieval cascade, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStage {
    /// Guessed URLs on known lyric hosts (needs an artist).
    DirectHosts,
    /// Worship-weighted queries against a dedicated lyrics search.
    DedicatedSearch,
    /// General web search, host-priority reordered.
    WebSearch,
}

impl RetrievalStage {
    pub const ALL: [RetrievalStage; 3] = [
        RetrievalStage::DirectHosts,
        RetrievalStage::DedicatedSearch,
        RetrievalStage::WebSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalStage::DirectHosts => "direct_hosts",
            RetrievalStage::DedicatedSearch => "dedicated_search",
            RetrievalStage::WebSearch => "web_search",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RetrievalStage::DirectHosts => "Known lyric hosts",
            RetrievalStage::DedicatedSearch => "Lyrics search",
            RetrievalStage::WebSearch => "Web search",
        }
    }
}

impl std::fmt::Display for RetrievalStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to one candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    Accepted { chars: usize },
    /// Non-2xx, timeout or connection failure. `status` is set for HTTP errors.
    FetchFailed { status: Option<u16> },
    /// The page had no qualifying lyric block.
    NoLyrics,
    /// A block was found but it was not longer than the minimum.
    TooShort { chars: usize },
}

impl CandidateOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CandidateOutcome::Accepted { .. })
    }
}

/// Where the returned lyrics came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LyricSource {
    Live { url: String, stage: RetrievalStage },
    /// Synthetic sample text; never authoritative.
    Sample,
}

/// Lyrics produced by the retrieval cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedLyrics {
    pub text: String,
    pub source: LyricSource,
    pub affinity: WorshipAffinity,
}

impl RetrievedLyrics {
    pub fn live(text: impl Into<String>, url: impl Into<String>, stage: RetrievalStage) -> Self {
        let text = text.into();
        let affinity = WorshipAffinity::score(&text);
        Self {
            text,
            source: LyricSource::Live {
                url: url.into(),
                stage,
            },
            affinity,
        }
    }

    pub fn sample(text: impl Into<String>) -> Self {
        let text = text.into();
        let affinity = WorshipAffinity::score(&text);
        Self {
            text,
            source: LyricSource::Sample,
            affinity,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, LyricSource::Sample)
    }

    pub fn source_url(&self) -> Option<&str> {
        match &self.source {
            LyricSource::Live { url, .. } => Some(url),
            LyricSource::Sample => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_lyrics() {
        let lyrics = RetrievedLyrics::live(
            "Praise God from whom all blessings flow",
            "https://hymnary.org/text/doxology",
            RetrievalStage::DirectHosts,
        );
        assert!(!lyrics.is_synthetic());
        assert_eq!(lyrics.source_url(), Some("https://hymnary.org/text/doxology"));
        assert_eq!(lyrics.affinity, WorshipAffinity::Christian);
    }

    #[test]
    fn test_sample_lyrics_are_synthetic() {
        let lyrics = RetrievedLyrics::sample("[Sample lyrics for demonstration]");
        assert!(lyrics.is_synthetic());
        assert!(lyrics.source_url().is_none());
    }

    #[test]
    fn test_source_serializes_tagged() {
        let json = serde_json::to_value(LyricSource::Live {
            url: "https://a.com".to_string(),
            stage: RetrievalStage::WebSearch,
        })
        .unwrap();
        assert_eq!(json["kind"], "live");
        assert_eq!(json["stage"], "web_search");
    }
}
