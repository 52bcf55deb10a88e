// src/tokenizer.rs

use tracing::trace;

use crate::pattern::{Alphabet, HYPHEN, SPACE};

/// Tokenizes a phrase for lexicon lookup.
///
/// Characters outside `alphabet` are removed, hyphens become spaces, the
/// remainder is lower-cased and split on single spaces. Consecutive spaces
/// therefore produce empty tokens; they never match a lexicon entry but they
/// do count towards the comparative score. The result is never empty: a
/// phrase without letters yields `[""]`.
pub fn tokenize(phrase: &str, alphabet: &Alphabet) -> Vec<String> {
    let kept = alphabet.strip(phrase);
    let separated = kept.replace(HYPHEN, " ");
    let lowered = separated.to_lowercase();
    let tokens: Vec<String> = lowered.split(SPACE).map(str::to_string).collect();
    trace!(phrase, ?tokens, "tokenized");
    tokens
}
