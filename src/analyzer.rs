// src/analyzer.rs

use std::borrow::Cow;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::negation::{detect_negations, NegationList};
use crate::options::Options;
use crate::pattern::Alphabet;
use crate::registry::Registry;
use crate::result::AnalysisResult;
use crate::scorer::score;
use crate::tokenizer::tokenize;

/// Analyzes `phrase` against the built-in lexicons.
///
/// Fails before any tokenization if the language, category or overrides in
/// `options` cannot be resolved.
///
/// ```
/// use afinn_sentiment::{analyze, Options};
///
/// let result = analyze("Cats are stupid.", &Options::default()).unwrap();
/// assert_eq!(result.score, -2);
/// assert_eq!(result.negative, vec!["stupid"]);
/// ```
pub fn analyze(phrase: &str, options: &Options) -> Result<AnalysisResult> {
    Registry::builtin().analyze(phrase, options)
}

/// Options resolved against a registry, ready to analyze any number of phrases.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub alphabet: &'a Alphabet,
    pub negations: &'a NegationList,
    pub lexicon: Cow<'a, Lexicon>,
}

impl Resolved<'_> {
    pub fn analyze(&self, phrase: &str) -> AnalysisResult {
        let tokens = tokenize(phrase, self.alphabet);
        let negation = detect_negations(&tokens, self.negations);
        let scored = score(&tokens, &self.lexicon, &negation);
        AnalysisResult::assemble(tokens, negation, scored)
    }
}
