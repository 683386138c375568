//! Fallback providers

pub mod samples;

pub use samples::SampleLyricsCatalog;
