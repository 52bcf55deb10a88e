// src/options.rs

use serde::Deserialize;

use crate::error::{Result, SentimentError};
use crate::lexicon::Lexicon;
use crate::pattern::Alphabet;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Per-call analysis options.
///
/// ```
/// use afinn_sentiment::{Lexicon, Options};
///
/// let options = Options::new()
///     .lang("en")
///     .category("finance")
///     .overrides([("meh", -1)].into_iter().collect::<Lexicon>());
/// assert_eq!(options.category.as_deref(), Some("finance"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Selects the base lexicon, negation list and alphabet.
    pub lang: String,
    /// Domain lexicon layered over the base lexicon.
    pub category: Option<String>,
    /// Merged last; may add words or change existing valences.
    pub overrides: Option<Lexicon>,
    /// Skip the base lexicon; scores come from `category` and `overrides` only.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            lang: DEFAULT_LANGUAGE.to_string(),
            category: None,
            overrides: None,
            strict: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn overrides(mut self, overrides: Lexicon) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parses options from a JSON object such as
    /// `{"lang": "de", "overrides": {"gut": 5}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SentimentError::invalid_option("options", e.to_string()))
    }

    pub(crate) fn has_overrides(&self) -> bool {
        self.overrides.as_ref().is_some_and(|o| !o.is_empty())
    }

    /// Checks the options that do not depend on a language.
    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(SentimentError::invalid_option("lang", "must not be empty"));
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(SentimentError::invalid_option("category", "must not be empty"));
            }
        }
        Ok(())
    }

    /// Override words the tokenizer never produces for `alphabet`, sorted.
    /// They stay in the merged lexicon and simply never match.
    pub(crate) fn unreachable_overrides(&self, alphabet: &Alphabet) -> Vec<&str> {
        let mut unreachable: Vec<&str> = self
            .overrides
            .iter()
            .flat_map(|overrides| overrides.words())
            .filter(|w| !alphabet.admits(w))
            .collect();
        unreachable.sort_unstable();
        unreachable
    }
}
