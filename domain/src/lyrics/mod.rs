//! Lyrics domain: extraction heuristics and retrieval results.

pub mod affinity;
pub mod extraction;
pub mod retrieval;

pub use affinity::WorshipAffinity;
pub use extraction::{
    ExtractionPass, ExtractionPolicy, LyricCandidate, content_lines, is_chord_line, strip_copyright,
};
pub use retrieval::{CandidateOutcome, LyricSource, RetrievalStage, RetrievedLyrics};
