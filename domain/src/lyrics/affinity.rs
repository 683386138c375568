//! Rough worship-content signal for retrieved lyrics.

use serde::{Deserialize, Serialize};

const INDICATORS: [&str; 11] = [
    "lord",
    "god",
    "jesus",
    "christ",
    "holy",
    "praise",
    "worship",
    "hallelujah",
    "amen",
    "savior",
    "heaven",
];

/// How strongly a text reads as sacred content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorshipAffinity {
    /// Two or more indicator words.
    Christian,
    /// Exactly one indicator word.
    Religious,
    General,
}

impl WorshipAffinity {
    /// Count distinct indicator words (substring match, case-insensitive).
    pub fn indicator_count(text: &str) -> usize {
        let lower = text.to_lowercase();
        INDICATORS.iter().filter(|word| lower.contains(*word)).count()
    }

    pub fn score(text: &str) -> Self {
        match Self::indicator_count(text) {
            0 => WorshipAffinity::General,
            1 => WorshipAffinity::Religious,
            _ => WorshipAffinity::Christian,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorshipAffinity::Christian => "Christian content detected",
            WorshipAffinity::Religious => "Religious content detected",
            WorshipAffinity::General => "General lyrics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        assert_eq!(
            WorshipAffinity::score("O Lord my God, when I in awesome wonder"),
            WorshipAffinity::Christian
        );
        assert_eq!(
            WorshipAffinity::score("Heaven is a place on earth"),
            WorshipAffinity::Religious
        );
        assert_eq!(
            WorshipAffinity::score("Take me out to the ball game"),
            WorshipAffinity::General
        );
    }

    #[test]
    fn test_repeated_word_counts_once() {
        assert_eq!(WorshipAffinity::indicator_count("holy holy holy"), 1);
    }
}
