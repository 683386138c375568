//! Line-level lyric extraction heuristics.
//!
//! The HTML side (container selection, markup stripping) lives in the
//! infrastructure adapter; everything here works on already-split lines so
//! that both passes share one set of thresholds.
//!
//! # Passes
//!
//! 1. **Structured**: a container block with at least `min_block_lines` lines
//!    is accepted when `min_filtered_lines` remain after dropping chord lines
//!    and one-word lines.
//! 2. **Fallback**: whole-page lines are grouped into runs of short lines;
//!    the longest run of at least `min_fallback_run` lines wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CHORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[A-G][#b]?(?:maj|min|m|sus|dim|aug|add)?\d*(?:/[A-G][#b]?)?\)?$")
        .expect("chord token pattern is valid")
});

static COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)copyright.*|all rights reserved.*").expect("copyright pattern is valid")
});

/// Which pass produced a [`LyricCandidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "pass")]
pub enum ExtractionPass {
    Structured { selector: String },
    Fallback,
}

/// An accepted lyric block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricCandidate {
    pub text: String,
    pub line_count: usize,
    pub pass: ExtractionPass,
}

impl LyricCandidate {
    fn from_lines(lines: &[&str], pass: ExtractionPass) -> Option<Self> {
        let text = strip_copyright(&lines.join("\n"));
        if text.is_empty() {
            return None;
        }
        let line_count = text.lines().count();
        Some(Self {
            text,
            line_count,
            pass,
        })
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Selector list and thresholds shared by every extraction call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionPolicy {
    /// CSS selectors for known lyric/chord containers, tried in order.
    pub selectors: Vec<String>,
    /// Elements whose text never counts as content.
    pub strip_tags: Vec<String>,
    /// Raw lines a container needs before it is considered.
    pub min_block_lines: usize,
    /// Lines that must survive chord/one-word filtering.
    pub min_filtered_lines: usize,
    /// Shortest run the fallback pass keeps.
    pub min_fallback_run: usize,
    /// Exclusive word ceiling for fallback lines.
    pub max_words_per_line: usize,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            selectors: [
                "div.lyrics",
                ".song-lyrics",
                ".chord-chart",
                ".tab-content",
                ".song-text",
                ".lyrics-container",
                "[class*=\"lyric\"]",
                ".verse",
                ".chorus",
                ".bridge",
                "pre",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            strip_tags: ["script", "style", "noscript"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_block_lines: 10,
            min_filtered_lines: 8,
            min_fallback_run: 15,
            max_words_per_line: 20,
        }
    }
}

impl ExtractionPolicy {
    /// Structured pass over one container's lines.
    pub fn accept_block(&self, lines: &[&str], selector: &str) -> Option<LyricCandidate> {
        if lines.len() < self.min_block_lines {
            return None;
        }
        let kept: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !is_chord_line(line) && word_count(line) > 1)
            .collect();
        if kept.len() < self.min_filtered_lines {
            return None;
        }
        LyricCandidate::from_lines(
            &kept,
            ExtractionPass::Structured {
                selector: selector.to_string(),
            },
        )
    }

    /// Fallback pass over whole-page lines.
    ///
    /// Chord lines are skipped without closing the current run; any other
    /// line outside `(1, max_words_per_line)` words closes it.
    pub fn best_fallback_run(&self, lines: &[&str]) -> Option<LyricCandidate> {
        let mut runs: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in lines.iter().copied() {
            if is_chord_line(line) {
                continue;
            }
            let words = word_count(line);
            if words > 1 && words < self.max_words_per_line {
                current.push(line);
            } else {
                if current.len() >= self.min_fallback_run {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
        if current.len() >= self.min_fallback_run {
            runs.push(current);
        }

        // Earliest run wins a tie.
        let best = runs.into_iter().fold(None::<(usize, Vec<&str>)>, |best, run| {
            let len = run.iter().map(|l| l.len()).sum::<usize>() + run.len().saturating_sub(1);
            match best {
                Some((best_len, _)) if best_len >= len => best,
                _ => Some((len, run)),
            }
        })?;
        LyricCandidate::from_lines(&best.1, ExtractionPass::Fallback)
    }
}

/// Split text into trimmed, non-blank lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// True when every token on the line is a chord symbol, e.g. `C  F  G  Am`.
pub fn is_chord_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|token| CHORD_TOKEN.is_match(token))
}

/// Remove copyright and rights notices up to the end of their line.
pub fn strip_copyright(text: &str) -> String {
    text.lines()
        .map(|line| COPYRIGHT.replace_all(line, "").trim_end().to_string())
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: [&str; 8] = [
        "Amazing grace how sweet the sound",
        "That saved a wretch like me",
        "I once was lost but now am found",
        "Was blind but now I see",
        "Twas grace that taught my heart to fear",
        "And grace my fears relieved",
        "How precious did that grace appear",
        "The hour I first believed",
    ];

    #[test]
    fn test_chord_lines() {
        assert!(is_chord_line("C  F  G  Am"));
        assert!(is_chord_line("G/B C2 Dsus4 (Em7)"));
        assert!(is_chord_line("F#m Bb"));
        assert!(!is_chord_line("Amazing grace"));
        assert!(!is_chord_line("A mighty fortress"));
        assert!(!is_chord_line(""));
    }

    #[test]
    fn test_block_with_chords_is_accepted_without_them() {
        let mut lines: Vec<&str> = Vec::new();
        for (i, prose) in PROSE.iter().enumerate() {
            lines.push("C  F  G  Am");
            if i % 2 == 0 {
                lines.push("G/B C D");
            }
            lines.push(prose);
        }
        assert_eq!(lines.len(), 20);

        let candidate = ExtractionPolicy::default()
            .accept_block(&lines, "pre")
            .expect("block should be accepted");
        assert_eq!(candidate.line_count, 8);
        assert_eq!(candidate.text, PROSE.join("\n"));
        assert!(!candidate.text.lines().any(is_chord_line));
        assert_eq!(
            candidate.pass,
            ExtractionPass::Structured {
                selector: "pre".to_string()
            }
        );
    }

    #[test]
    fn test_block_below_line_floor_is_rejected() {
        let lines: Vec<&str> = PROSE
            .iter()
            .copied()
            .chain(["Amazing love", "Oh what sacrifice"])
            .take(9)
            .collect();
        assert_eq!(lines.len(), 9);
        assert!(ExtractionPolicy::default().accept_block(&lines, "pre").is_none());
    }

    #[test]
    fn test_block_with_too_few_lyric_lines_is_rejected() {
        let mut lines: Vec<&str> = PROSE[..7].to_vec();
        lines.extend(["Home", "About", "Contact"]);
        assert!(ExtractionPolicy::default().accept_block(&lines, "pre").is_none());
    }

    #[test]
    fn test_copyright_line_is_removed() {
        let mut lines: Vec<&str> = PROSE.to_vec();
        lines.extend([
            "My chains are gone",
            "I've been set free",
            "Copyright 2020 XYZ Music",
        ]);
        let candidate = ExtractionPolicy::default()
            .accept_block(&lines, ".song-text")
            .unwrap();
        assert!(!candidate.text.contains("Copyright"));
        assert!(candidate.text.ends_with("I've been set free"));
    }

    #[test]
    fn test_strip_copyright_mid_line() {
        let text = "Great is Thy faithfulness\n(c) 1923 Hope. All Rights Reserved. Used by permission";
        assert_eq!(strip_copyright(text), "Great is Thy faithfulness\n(c) 1923 Hope.");
    }

    #[test]
    fn test_fallback_picks_longest_run() {
        let short_run: Vec<String> = (0..15).map(|i| format!("short line {i}")).collect();
        let long_run: Vec<String> = (0..16)
            .map(|i| format!("a somewhat longer lyric line {i}"))
            .collect();
        let paragraph = "This paragraph of site prose has far too many words to be any kind of lyric line at all honestly";

        let mut lines: Vec<&str> = short_run.iter().map(String::as_str).collect();
        lines.push(paragraph);
        lines.extend(long_run.iter().map(String::as_str));
        lines.push("Menu");

        let candidate = ExtractionPolicy::default().best_fallback_run(&lines).unwrap();
        assert_eq!(candidate.pass, ExtractionPass::Fallback);
        assert_eq!(candidate.line_count, 16);
        assert!(candidate.text.starts_with("a somewhat longer lyric line 0"));
    }

    #[test]
    fn test_fallback_chord_lines_do_not_break_runs() {
        let lyric: Vec<String> = (0..15).map(|i| format!("sing to the Lord {i}")).collect();
        let mut lines: Vec<&str> = Vec::new();
        for (i, line) in lyric.iter().enumerate() {
            if i == 7 {
                lines.push("D A G");
            }
            lines.push(line);
        }
        let candidate = ExtractionPolicy::default().best_fallback_run(&lines).unwrap();
        assert_eq!(candidate.line_count, 15);
        assert!(!candidate.text.contains("D A G"));
    }

    #[test]
    fn test_fallback_tie_keeps_first_run() {
        let first: Vec<String> = (0..15).map(|i| format!("first run {i:02}")).collect();
        let second: Vec<String> = (0..15).map(|i| format!("other run {i:02}")).collect();
        let mut lines: Vec<&str> = first.iter().map(String::as_str).collect();
        lines.push("Navigation");
        lines.extend(second.iter().map(String::as_str));

        let candidate = ExtractionPolicy::default().best_fallback_run(&lines).unwrap();
        assert!(candidate.text.starts_with("first run 00"));
    }

    #[test]
    fn test_fallback_without_qualifying_run() {
        let lines = vec!["Home", "two words", "Footer"];
        assert!(ExtractionPolicy::default().best_fallback_run(&lines).is_none());
    }

    #[test]
    fn test_content_lines() {
        assert_eq!(content_lines("  a b \n\n\t\n c d  "), vec!["a b", "c d"]);
    }
}
