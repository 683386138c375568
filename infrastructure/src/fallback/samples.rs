//! Built-in sample lyrics used when live retrieval is exhausted

use psalter_application::FallbackProvider;
use psalter_domain::{RetrievedLyrics, Song};

const AMAZING_GRACE: &str = "Amazing grace, how sweet the sound
That saved a wretch like me
I once was lost, but now am found
Was blind, but now I see

'Twas grace that taught my heart to fear
And grace my fears relieved
How precious did that grace appear
The hour I first believed";

const HOW_GREAT_THOU_ART: &str = "O Lord my God, when I in awesome wonder
Consider all the worlds Thy hands have made
I see the stars, I hear the rolling thunder
Thy power throughout the universe displayed

Then sings my soul, my Savior God to Thee
How great Thou art, how great Thou art
Then sings my soul, my Savior God to Thee
How great Thou art, how great Thou art";

const BLESSED_BE_YOUR_NAME: &str = "Blessed be Your name in the land that is plentiful
Where Your streams of abundance flow
Blessed be Your name
Blessed be Your name when I'm found in the desert place
Though I walk through the wilderness
Blessed be Your name";

/// Keyed sample table.
///
/// A key matches when its words appear as one contiguous run of whole
/// words in the title, compared case-insensitively with edge punctuation
/// ignored. Partial titles such as "Art" never match.
#[derive(Debug, Clone)]
pub struct SampleLyricsCatalog {
    entries: Vec<(String, String)>,
}

impl SampleLyricsCatalog {
    /// A catalog with no entries; every title gets the placeholder.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, key: &str, lyrics: impl Into<String>) -> Self {
        self.entries.push((normalize(key), lyrics.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, title: &str) -> Option<&str> {
        let title = normalize(title);
        let title_words: Vec<&str> = title.split(' ').collect();
        self.entries
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .find(|(key, _)| {
                let key_words: Vec<&str> = key.split(' ').collect();
                title_words
                    .windows(key_words.len())
                    .any(|window| window == key_words.as_slice())
            })
            .map(|(_, lyrics)| lyrics.as_str())
    }
}

impl Default for SampleLyricsCatalog {
    fn default() -> Self {
        Self::empty()
            .with_entry("amazing grace", AMAZING_GRACE)
            .with_entry("how great thou art", HOW_GREAT_THOU_ART)
            .with_entry("blessed be your name", BLESSED_BE_YOUR_NAME)
    }
}

impl FallbackProvider for SampleLyricsCatalog {
    fn sample_for(&self, song: &Song) -> RetrievedLyrics {
        let text = match self.lookup(song.title()) {
            Some(lyrics) => format!("[Sample lyrics for demonstration]\n\n{}", lyrics),
            None => format!(
                "[Sample lyrics for '{}' - network search unavailable]\n\n\
                 This is a sample worship song for demonstration.\n\
                 The analysis will work with any lyrics content.\n\
                 Please check your internet connection for live lyrics search.",
                song.title()
            ),
        };
        RetrievedLyrics::sample(text)
    }
}

/// Lowercase words joined by single spaces, edge punctuation trimmed.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
