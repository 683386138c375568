//! Use cases (application services)

pub mod analyze_lyrics;
pub mod analyze_song;
pub mod retrieve_lyrics;
pub mod run_assistant;
pub mod search_candidates;
