//! Console output formatter for analysis results

use colored::Colorize;
use psalter_application::{AssistantOutput, SongAnalysis};
use psalter_domain::AnalysisResult;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the human-readable report
    pub fn format(result: &SongAnalysis) -> String {
        let analysis = &result.analysis;
        let mut output = String::new();

        output.push_str(&format!("{}\n", "WORSHIP SONG ANALYSIS REPORT".cyan().bold()));
        output.push_str(&Self::rule());
        output.push_str("\n\n");

        output.push_str(&format!("Song: {}\n", analysis.title));
        output.push_str(&format!("Artist: {}\n\n", analysis.artist));

        output.push_str(&Self::list("THEMES:", &analysis.themes));
        output.push_str(&Self::list("BIBLICAL REFERENCES:", &analysis.biblical_references));
        output.push_str(&Self::list("WORSHIP ELEMENTS:", &analysis.worship_elements));

        output.push_str(&format!(
            "{} {}\n",
            "EMOTIONAL TONE:".bold(),
            analysis.emotional_tone
        ));
        output.push_str(&format!(
            "{} {}\n",
            "COMPLEXITY LEVEL:".bold(),
            analysis.complexity_level
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "SERVICE PLACEMENT:".bold(),
            analysis.service_placement
        ));

        output.push_str(&Self::list(
            "SEASONAL APPROPRIATENESS:",
            &analysis.seasonal_appropriateness,
        ));

        output.push_str(&format!("{}\n{}\n\n", "SUMMARY:".bold(), analysis.summary));
        output.push_str(&Self::rule());

        if result.is_synthetic() {
            output.push_str(&format!(
                "\n\n{}",
                "Note: live lyrics were not found; this analysis is based on sample text."
                    .dimmed()
            ));
        } else if let Some(url) = result.lyrics.source_url() {
            output.push_str(&format!("\n\n{} {}", "Lyrics source:".dimmed(), url.dimmed()));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the assistant's final answer
    pub fn format_assistant(output: &AssistantOutput) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            "=== Lyrics Assistant ===".cyan().bold(),
            output.answer.trim(),
            format!(
                "({} model turns, {} lyric lookups)",
                output.iterations, output.tool_calls
            )
            .dimmed()
        )
    }

    fn rule() -> String {
        "=".repeat(50).cyan().to_string()
    }

    fn list(title: &str, items: &[String]) -> String {
        let mut section = format!("{}\n", title.bold());
        for item in items {
            section.push_str(&format!("  • {}\n", item));
        }
        section.push('\n');
        section
    }
}
