//! Lyric extractor port

use psalter_domain::LyricCandidate;

/// Isolates the lyric block from fetched page content.
///
/// `None` means no qualifying block was found, which is distinct from an
/// empty lyric text.
pub trait LyricExtractor: Send + Sync {
    fn extract(&self, content: &str) -> Option<LyricCandidate>;
}
