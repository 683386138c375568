//! Progress reporting for lyric retrieval and analysis

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use psalter_application::{NoProgress, ProgressNotifier};
use psalter_domain::util::truncate_str;
use psalter_domain::{CandidateOutcome, Model, RetrievalStage, RetrievedLyrics, Song};
use std::sync::Mutex;
use std::time::Duration;

const URL_WIDTH: usize = 60;

/// How progress is shown on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Nothing (`--quiet`)
    Silent,
    /// Redrawn progress bars; needs a terminal
    Bars,
    /// One plain line per event, for pipes and log files
    Lines,
}

impl ProgressMode {
    pub fn select(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => Self::Silent,
            (false, true) => Self::Bars,
            (false, false) => Self::Lines,
        }
    }

    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            Self::Silent => Box::new(NoProgress),
            Self::Bars => Box::new(ProgressReporter::new()),
            Self::Lines => Box::new(SimpleProgress),
        }
    }
}

/// Reports progress with progress bars on stderr
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
    analysis_spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            stage_bar: Mutex::new(None),
            analysis_spinner: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn outcome_line(url: &str, outcome: &CandidateOutcome) -> String {
        let url = truncate_str(url, URL_WIDTH);
        match outcome {
            CandidateOutcome::Accepted { chars } => {
                format!("{} {} ({} chars)", "v".green(), url, chars)
            }
            CandidateOutcome::FetchFailed { status: Some(code) } => {
                format!("{} {} (HTTP {})", "x".red(), url, code)
            }
            CandidateOutcome::FetchFailed { status: None } => {
                format!("{} {} (unreachable)", "x".red(), url)
            }
            CandidateOutcome::NoLyrics => format!("{} {} (no lyrics)", "x".red(), url),
            CandidateOutcome::TooShort { chars } => {
                format!("{} {} (too short: {} chars)", "x".yellow(), url, chars)
            }
        }
    }

    fn finish_stage(&self, message: String) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: RetrievalStage, candidates: usize) {
        let pb = self.multi.add(ProgressBar::new(candidates as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage.display_name().to_string());
        pb.set_message("Fetching...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_candidate_result(&self, _stage: RetrievalStage, url: &str, outcome: &CandidateOutcome) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            pb.set_message(Self::outcome_line(url, outcome));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, _stage: RetrievalStage) {
        self.finish_stage(format!("{}", "nothing usable".yellow()));
    }

    fn on_lyrics_found(&self, lyrics: &RetrievedLyrics) {
        self.finish_stage(format!(
            "{} ({})",
            "lyrics found".green(),
            lyrics.affinity.label()
        ));
    }

    fn on_fallback(&self, song: &Song) {
        self.multi
            .println(format!(
                "{} No live lyrics for {}; using sample text",
                "!".yellow().bold(),
                song
            ))
            .ok();
    }

    fn on_analysis_start(&self, model: &Model) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Analyzing with {}...", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.analysis_spinner.lock().unwrap() = Some(pb);
    }

    fn on_analysis_complete(&self) {
        if let Some(pb) = self.analysis_spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

/// Simple line-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: RetrievalStage, candidates: usize) {
        eprintln!(
            "{} {} ({} candidates)",
            "->".cyan(),
            stage.display_name().bold(),
            candidates
        );
    }

    fn on_candidate_result(&self, _stage: RetrievalStage, url: &str, outcome: &CandidateOutcome) {
        eprintln!("  {}", ProgressReporter::outcome_line(url, outcome));
    }

    fn on_stage_complete(&self, _stage: RetrievalStage) {}

    fn on_lyrics_found(&self, lyrics: &RetrievedLyrics) {
        eprintln!("{} {}", "v".green(), lyrics.affinity.label());
    }

    fn on_fallback(&self, song: &Song) {
        eprintln!("{} No live lyrics for {}; using sample text", "!".yellow(), song);
    }

    fn on_analysis_start(&self, model: &Model) {
        eprintln!("{} Analyzing with {}", "->".cyan(), model.to_string().bold());
    }
}
