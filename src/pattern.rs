// src/pattern.rs

use std::borrow::Cow;

use once_cell::sync::Lazy; // Built-in alphabets are compiled once and shared
use regex::Regex;

use crate::error::{Result, SentimentError};

// ----- REGEX CHAR CLASSES -----
// Content strings meant to sit inside `[...]`. Both cases are listed because
// characters are stripped before the phrase is lower-cased.
pub const LATIN_ALPHA_CONTENT_STR: &str = "a-zA-Z";
pub const GERMAN_EXTRA_ALPHA_CONTENT_STR: &str = "äöüßÄÖÜẞ";
pub const SEPARATOR_CONTENT_STR: &str = r"\- ";

pub const HYPHEN: char = '-';
pub const SPACE: char = ' ';

static LATIN: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new(LATIN_ALPHA_CONTENT_STR)
        .unwrap_or_else(|e| panic!("Latin alphabet compile error: {}", e))
});

static GERMAN: Lazy<Alphabet> = Lazy::new(|| {
    let letters = format!("{}{}", LATIN_ALPHA_CONTENT_STR, GERMAN_EXTRA_ALPHA_CONTENT_STR);
    Alphabet::new(&letters).unwrap_or_else(|e| panic!("German alphabet compile error: {}", e))
});

/// The letters one language keeps during tokenization.
///
/// Everything outside the letters, the hyphen and the space is removed from a
/// phrase before it is split.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: String,
    strip: Regex,
}

impl Alphabet {
    /// Compiles an alphabet from character-class content such as `a-zA-Zäö`.
    pub fn new(letters: &str) -> Result<Self> {
        let pattern = format!("[^{}{}]+", letters, SEPARATOR_CONTENT_STR);
        let strip = Regex::new(&pattern).map_err(|e| SentimentError::InvalidLexicon {
            source_name: format!("alphabet '{}'", letters),
            reason: e.to_string(),
        })?;
        Ok(Alphabet {
            letters: letters.to_string(),
            strip,
        })
    }

    /// Basic Latin letters. Also the fallback for languages without an alphabet of their own.
    pub fn latin() -> &'static Alphabet {
        &LATIN
    }

    /// Latin letters plus umlauts and sharp s.
    pub fn german() -> &'static Alphabet {
        &GERMAN
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Removes every character that is not a letter, hyphen or space.
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.strip.replace_all(text, "")
    }

    /// Returns `true` if `word` can come out of the tokenizer unchanged, i.e.
    /// a lexicon entry under this key is reachable.
    pub fn admits(&self, word: &str) -> bool {
        !word.is_empty()
            && !word.contains([HYPHEN, SPACE])
            && self.strip(word) == word
            && word.to_lowercase() == word
    }
}
