// src/result.rs

use serde::Serialize;

use crate::scorer::Scored;

/// Outcome of analyzing one phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub score: i64,
    /// `score` divided by the number of tokens, empty tokens included.
    pub comparative: f64,
    pub tokens: Vec<String>,
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub negation: Vec<String>,
}

impl AnalysisResult {
    pub fn assemble(tokens: Vec<String>, negation: Vec<String>, scored: Scored) -> Self {
        let comparative = comparative(scored.score, tokens.len());
        AnalysisResult {
            score: scored.score,
            comparative,
            tokens,
            words: scored.words,
            positive: scored.positive,
            negative: scored.negative,
            negation,
        }
    }
}

// The tokenizer always yields at least one token; zero is handled anyway.
fn comparative(score: i64, token_count: usize) -> f64 {
    if token_count == 0 {
        0.0
    } else {
        score as f64 / token_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn comparative_divides_by_token_count() {
        let scored = Scored {
            score: 3,
            words: strings(&["good"]),
            positive: strings(&["good"]),
            negative: vec![],
        };
        let result = AnalysisResult::assemble(strings(&["good", "", "day", "x"]), vec![], scored);
        assert_eq!(result.score, 3);
        assert_eq!(result.comparative, 0.75);
        assert_eq!(result.tokens.len(), 4);
    }

    #[test]
    fn no_tokens_gives_zero_comparative() {
        let result = AnalysisResult::assemble(vec![], vec![], Scored::default());
        assert_eq!(result.comparative, 0.0);
    }

    #[test]
    fn serializes_with_field_names() {
        let result = AnalysisResult::assemble(strings(&["not", "good"]), strings(&["not"]), Scored::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["comparative"], 0.0);
        assert_eq!(json["tokens"], serde_json::json!(["not", "good"]));
        assert_eq!(json["negation"], serde_json::json!(["not"]));
        assert_eq!(json["words"], serde_json::json!([]));
    }
}
