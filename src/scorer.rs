// src/scorer.rs

use tracing::trace;

use crate::lexicon::Lexicon;

/// Lexicon matches of one phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scored {
    /// Widened so that any sum of `i32` valences fits.
    pub score: i64,
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Sums the valence of every token found in `lexicon`.
///
/// Any negation switches scoring off for the whole phrase: the result is then
/// a zero score with no matched words, however strong the other tokens are.
/// Duplicate tokens are counted once per occurrence and unknown tokens are
/// skipped.
pub fn score(tokens: &[String], lexicon: &Lexicon, negations: &[String]) -> Scored {
    let mut scored = Scored::default();
    if !negations.is_empty() {
        trace!(?negations, "negation present, scoring skipped");
        return scored;
    }

    for token in tokens {
        let Some(valence) = lexicon.get(token) else {
            continue;
        };
        trace!(token = token.as_str(), valence, "matched");

        scored.words.push(token.clone());
        if valence > 0 {
            scored.positive.push(token.clone());
        }
        if valence < 0 {
            scored.negative.push(token.clone());
        }
        scored.score += i64::from(valence);
    }
    scored
}
