// src/lexicon.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// Word to signed valence, AFINN style (typically -5..=5).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: HashMap<String, i32>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of `word: valence` pairs.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SentimentError::InvalidLexicon {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn insert(&mut self, word: impl Into<String>, valence: i32) -> Option<i32> {
        self.entries.insert(word.into(), valence)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new lexicon with `layer` applied on top of `self`.
    /// Entries of `layer` replace entries of `self` under the same word.
    pub fn merge(&self, layer: &Lexicon) -> Lexicon {
        let mut merged = self.clone();
        merged.extend_from(layer);
        merged
    }

    pub(crate) fn extend_from(&mut self, layer: &Lexicon) {
        for (word, valence) in layer.entries.iter() {
            self.entries.insert(word.clone(), *valence);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Lexicon {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
