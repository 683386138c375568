//! Song value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A song to look up and analyze (Value Object)
///
/// The title is required; the artist is optional and only enables the
/// direct known-host URL guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    title: String,
    artist: Option<String>,
}

impl Song {
    /// Try to create a song, rejecting a blank title.
    ///
    /// A blank artist is treated as absent.
    pub fn try_new(
        title: impl Into<String>,
        artist: Option<impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        let artist = artist
            .map(Into::into)
            .map(|a: String| a.trim().to_string())
            .filter(|a| !a.is_empty());
        Ok(Self { title, artist })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// "{title} {artist}" with the artist omitted when absent.
    pub fn search_base(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} {}", self.title, artist),
            None => self.title.clone(),
        }
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.artist {
            Some(artist) => write!(f, "'{}' by {}", self.title, artist),
            None => write!(f, "'{}'", self.title),
        }
    }
}
