//! HTML lyric extractor
//!
//! Runs the structured pass over the configured selectors first, then the
//! whole-document fallback pass. Both passes share one [`ExtractionPolicy`].

use psalter_application::LyricExtractor;
use psalter_domain::lyrics::content_lines;
use psalter_domain::{ExtractionPolicy, LyricCandidate};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

/// Extracts lyric blocks from HTML (or plain text) pages.
pub struct HtmlLyricExtractor {
    policy: ExtractionPolicy,
    selectors: Vec<(String, Selector)>,
}

impl HtmlLyricExtractor {
    /// Compile the policy's selectors. Selectors that fail to parse are
    /// logged and skipped.
    pub fn new(policy: ExtractionPolicy) -> Self {
        let selectors = policy
            .selectors
            .iter()
            .filter_map(|raw| match Selector::parse(raw) {
                Ok(selector) => Some((raw.clone(), selector)),
                Err(e) => {
                    warn!("Ignoring invalid lyric selector '{}': {}", raw, e);
                    None
                }
            })
            .collect();
        Self { policy, selectors }
    }

    fn element_text(&self, element: ElementRef) -> String {
        let mut parts = Vec::new();
        collect_element_text(element, &self.policy.strip_tags, &mut parts);
        parts.join("\n")
    }
}

impl Default for HtmlLyricExtractor {
    fn default() -> Self {
        Self::new(ExtractionPolicy::default())
    }
}

impl LyricExtractor for HtmlLyricExtractor {
    fn extract(&self, content: &str) -> Option<LyricCandidate> {
        let document = Html::parse_document(content);

        for (raw, selector) in &self.selectors {
            for element in document.select(selector) {
                let text = self.element_text(element);
                if let Some(candidate) = self.policy.accept_block(&content_lines(&text), raw) {
                    debug!(
                        "Structured pass matched '{}' with {} lines",
                        raw, candidate.line_count
                    );
                    return Some(candidate);
                }
            }
        }

        let text = self.element_text(document.root_element());
        let candidate = self.policy.best_fallback_run(&content_lines(&text));
        if let Some(c) = &candidate {
            debug!("Fallback pass kept a run of {} lines", c.line_count);
        }
        candidate
    }
}

/// Recursively collect text nodes, skipping subtrees rooted at `skip_tags`.
fn collect_element_text(element: ElementRef, skip_tags: &[String], parts: &mut Vec<String>) {
    let tag_name = element.value().name();
    if skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag_name)) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    parts.push(text.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_element_text(child_el, skip_tags, parts);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psalter_domain::ExtractionPass;
    use psalter_domain::lyrics::is_chord_line;

    fn verse_lines(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("Praise the Lord in verse line {}", i))
            .collect()
    }

    #[test]
    fn test_pre_block_is_structured_match() {
        let html = format!(
            "<html><body><h1>Song</h1><pre>{}</pre></body></html>",
            verse_lines(12).join("\n")
        );
        let candidate = HtmlLyricExtractor::default().extract(&html).unwrap();

        assert_eq!(
            candidate.pass,
            ExtractionPass::Structured {
                selector: "pre".to_string()
            }
        );
        assert_eq!(candidate.line_count, 12);
        assert!(candidate.text.starts_with("Praise the Lord in verse line 1\n"));
    }

    #[test]
    fn test_chord_lines_are_filtered_out() {
        let mut lines = Vec::new();
        for line in verse_lines(10) {
            lines.push("G  C  D/F#  Em".to_string());
            lines.push(line);
        }
        let html = format!("<div class=\"chord-chart\">{}</div>", lines.join("<br>"));
        let candidate = HtmlLyricExtractor::default().extract(&html).unwrap();

        assert_eq!(candidate.line_count, 10);
        assert!(!candidate.text.lines().any(is_chord_line));
    }

    #[test]
    fn test_script_and_style_are_ignored() {
        let html = format!(
            "<div class=\"lyrics\"><script>var a = 1;\nvar b = 2;</script><style>p {{ color: red }}</style>{}</div>",
            verse_lines(10).join("<br/>")
        );
        let candidate = HtmlLyricExtractor::default().extract(&html).unwrap();

        assert!(!candidate.text.contains("var a"));
        assert!(!candidate.text.contains("color"));
        assert_eq!(candidate.line_count, 10);
    }

    #[test]
    fn test_copyright_is_stripped() {
        let mut lines = verse_lines(10);
        lines.push("Copyright 2001 Worship Music All rights reserved".to_string());
        let html = format!("<pre>{}</pre>", lines.join("\n"));
        let candidate = HtmlLyricExtractor::default().extract(&html).unwrap();

        assert!(!candidate.text.to_lowercase().contains("copyright"));
        assert_eq!(candidate.line_count, 10);
    }

    #[test]
    fn test_short_block_falls_through_to_fallback() {
        // 9 lines is below the structured minimum; the page body still has
        // a long enough run of lyric-shaped lines.
        let html = format!(
            "<html><body><pre>{}</pre><p>{}</p></body></html>",
            verse_lines(9).join("\n"),
            verse_lines(16).join("<br>")
        );
        let candidate = HtmlLyricExtractor::default().extract(&html).unwrap();

        assert_eq!(candidate.pass, ExtractionPass::Fallback);
        assert!(candidate.line_count >= 15);
    }

    #[test]
    fn test_no_lyrics_found() {
        let html = "<html><body><nav>Home</nav><p>Nothing here</p></body></html>";
        assert!(HtmlLyricExtractor::default().extract(html).is_none());
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let policy = ExtractionPolicy {
            selectors: vec!["[[[".to_string(), "pre".to_string()],
            ..ExtractionPolicy::default()
        };
        let extractor = HtmlLyricExtractor::new(policy);
        let html = format!("<pre>{}</pre>", verse_lines(12).join("\n"));

        assert!(extractor.extract(&html).is_some());
    }

    #[test]
    fn test_plain_text_content() {
        let text = verse_lines(20).join("\n");
        let candidate = HtmlLyricExtractor::default().extract(&text).unwrap();
        assert_eq!(candidate.line_count, 20);
    }
}
