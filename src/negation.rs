// src/negation.rs

use std::collections::HashSet;

use crate::error::{Result, SentimentError};

/// Words that switch scoring off for a whole phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegationList {
    words: HashSet<String>,
}

impl NegationList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NegationList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a JSON array of strings.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let words: Vec<String> =
            serde_json::from_str(json).map_err(|e| SentimentError::InvalidLexicon {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(NegationList::new(words))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns every token found in `negations`, duplicates included, in token order.
pub fn detect_negations(tokens: &[String], negations: &NegationList) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| negations.contains(token))
        .cloned()
        .collect()
}
