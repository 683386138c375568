//! Progress display for the retrieval cascade and analysis

pub mod reporter;
