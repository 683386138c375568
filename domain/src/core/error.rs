//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Song title cannot be empty")]
    EmptyTitle,

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyTitle.to_string(), "Song title cannot be empty");
        assert_eq!(
            DomainError::InvalidModel(" ".to_string()).to_string(),
            "Invalid model:  "
        );
    }
}
