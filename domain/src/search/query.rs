//! Query building for the lyric search cascade.
//!
//! Pure functions only: the same song always yields the same queries and
//! the same guessed URLs.

use crate::core::song::Song;
use serde::{Deserialize, Serialize};

/// One phrasing used to search for lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    Lyrics,
    ChordsLyrics,
    Tabs,
    GuitarChords,
    WorshipLyrics,
    ChristianLyrics,
    HymnLyrics,
    Plain,
}

impl SearchStrategy {
    /// Phrasings for general web search, highest-value first.
    pub const GENERAL: [SearchStrategy; 4] = [
        SearchStrategy::Lyrics,
        SearchStrategy::ChordsLyrics,
        SearchStrategy::Tabs,
        SearchStrategy::GuitarChords,
    ];

    /// Worship-weighted phrasings for the dedicated lyrics search.
    pub const WORSHIP: [SearchStrategy; 4] = [
        SearchStrategy::WorshipLyrics,
        SearchStrategy::ChristianLyrics,
        SearchStrategy::HymnLyrics,
        SearchStrategy::Plain,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            SearchStrategy::Lyrics => "lyrics",
            SearchStrategy::ChordsLyrics => "chords lyrics",
            SearchStrategy::Tabs => "tabs",
            SearchStrategy::GuitarChords => "guitar chords",
            SearchStrategy::WorshipLyrics => "worship song lyrics",
            SearchStrategy::ChristianLyrics => "Christian song lyrics",
            SearchStrategy::HymnLyrics => "hymn lyrics",
            SearchStrategy::Plain => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Lyrics => "lyrics",
            SearchStrategy::ChordsLyrics => "chords_lyrics",
            SearchStrategy::Tabs => "tabs",
            SearchStrategy::GuitarChords => "guitar_chords",
            SearchStrategy::WorshipLyrics => "worship_lyrics",
            SearchStrategy::ChristianLyrics => "christian_lyrics",
            SearchStrategy::HymnLyrics => "hymn_lyrics",
            SearchStrategy::Plain => "plain",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A composed search query tagged with its strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub strategy: SearchStrategy,
    pub text: String,
}

impl SearchQuery {
    pub fn new(strategy: SearchStrategy, base: &str) -> Self {
        let text = format!("{} {}", base, strategy.suffix()).trim().to_string();
        Self { strategy, text }
    }
}

/// Builds ordered queries and direct URL guesses for a song.
pub struct QueryBuilder;

impl QueryBuilder {
    /// General web search queries: lyrics, chords, tabs, guitar chords.
    pub fn general_queries(song: &Song) -> Vec<SearchQuery> {
        Self::build(song, &SearchStrategy::GENERAL)
    }

    /// Worship-weighted queries for the dedicated lyrics search.
    pub fn worship_queries(song: &Song) -> Vec<SearchQuery> {
        Self::build(song, &SearchStrategy::WORSHIP)
    }

    pub fn build(song: &Song, strategies: &[SearchStrategy]) -> Vec<SearchQuery> {
        let base = song.search_base();
        strategies
            .iter()
            .map(|strategy| SearchQuery::new(*strategy, &base))
            .collect()
    }

    /// Guessed URLs on known lyric hosts, sacred sources first.
    ///
    /// Empty without an artist.
    pub fn direct_urls(song: &Song) -> Vec<String> {
        let Some(artist) = song.artist() else {
            return Vec::new();
        };
        let title_slug = slug(song.title());
        let artist_slug = slug(artist);
        let title_clean = clean(song.title());
        let artist_clean = clean(artist);

        vec![
            format!("https://hymnary.org/text/{title_slug}"),
            format!("https://www.worshiptogether.com/songs/{title_slug}-{artist_slug}/"),
            format!("https://www.christianlyrics.com/{artist_slug}/{title_slug}.html"),
            format!("https://www.lyrics.com/lyrics/{artist_slug}/{title_slug}"),
            format!("https://www.songlyrics.com/{artist_slug}/{title_slug}-lyrics/"),
            format!("https://www.azlyrics.com/lyrics/{artist_clean}/{title_clean}.html"),
        ]
    }
}

/// Lowercase, every non-ASCII-alphanumeric char replaced by `-`, outer dashes trimmed.
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

/// Lowercase ASCII alphanumerics only.
pub fn clean(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
