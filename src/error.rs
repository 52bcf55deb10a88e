// src/error.rs

//! Error types for lexicon resolution and option handling.

use thiserror::Error;

pub type Result<T, E = SentimentError> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SentimentError {
    #[error("language '{lang}' not supported")]
    UnsupportedLanguage { lang: String },

    #[error("category '{category}' not supported for language '{lang}'")]
    UnsupportedCategory { lang: String, category: String },

    #[error("invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    /// Lexicon or negation data handed in by a loader could not be parsed.
    #[error("invalid lexicon data in {source_name}: {reason}")]
    InvalidLexicon { source_name: String, reason: String },
}

impl SentimentError {
    pub(crate) fn invalid_option(option: &str, reason: impl Into<String>) -> Self {
        SentimentError::InvalidOption {
            option: option.to_string(),
            reason: reason.into(),
        }
    }
}
