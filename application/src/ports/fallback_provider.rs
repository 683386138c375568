//! Fallback provider port

use psalter_domain::{RetrievedLyrics, Song};

/// Supplies synthetic lyrics once every live source has failed.
///
/// Implementations must return [`RetrievedLyrics`] tagged as a sample.
pub trait FallbackProvider: Send + Sync {
    fn sample_for(&self, song: &Song) -> RetrievedLyrics;
}
