// tests/properties.rs

use afinn_sentiment::{analyze, Options, Registry};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "good", "bad", "great", "love", "hate", "superb", "awful", "cats", "the", "day", "not",
    "never", "dont", "Happy", "SAD", "well-known", "self-loathing", "", "42", "!!", "rally",
];

fn phrase() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..12),
        prop::sample::select(vec![" ", "  ", ", ", "-", "\t"]),
    )
        .prop_map(|(words, separator)| words.join(separator))
}

proptest! {
    #[test]
    fn score_is_sum_of_matched_valences(phrase in phrase()) {
        let options = Options::default();
        let resolved = Registry::builtin().resolve(&options).unwrap();
        let result = resolved.analyze(&phrase);

        let sum: i64 = result.words.iter().map(|w| i64::from(resolved.lexicon.get(w).unwrap())).sum();
        prop_assert_eq!(result.score, sum);
    }

    #[test]
    fn words_are_a_sub_multiset_of_tokens(phrase in phrase()) {
        let result = analyze(&phrase, &Options::default()).unwrap();
        let mut remaining = result.tokens.clone();
        for word in &result.words {
            let position = remaining.iter().position(|t| t == word);
            prop_assert!(position.is_some(), "{} not among tokens", word);
            remaining.swap_remove(position.unwrap());
        }
    }

    #[test]
    fn polarity_buckets_partition_words(phrase in phrase()) {
        let options = Options::new().category("finance");
        let resolved = Registry::builtin().resolve(&options).unwrap();
        let result = resolved.analyze(&phrase);

        prop_assert_eq!(result.positive.len() + result.negative.len(), result.words.len());
        for word in &result.positive {
            prop_assert!(resolved.lexicon.get(word).unwrap() > 0);
        }
        for word in &result.negative {
            prop_assert!(resolved.lexicon.get(word).unwrap() < 0);
        }
    }

    #[test]
    fn analysis_is_repeatable(phrase in phrase()) {
        let options = Options::default();
        prop_assert_eq!(analyze(&phrase, &options).unwrap(), analyze(&phrase, &options).unwrap());
    }

    #[test]
    fn negation_zeroes_everything(phrase in phrase()) {
        let result = analyze(&phrase, &Options::default()).unwrap();
        if !result.negation.is_empty() {
            prop_assert_eq!(result.score, 0);
            prop_assert!(result.words.is_empty());
            prop_assert!(result.positive.is_empty());
            prop_assert!(result.negative.is_empty());
        }
    }

    #[test]
    fn comparative_divides_by_token_count(phrase in phrase()) {
        let result = analyze(&phrase, &Options::default()).unwrap();
        prop_assert!(!result.tokens.is_empty());
        prop_assert_eq!(result.comparative, result.score as f64 / result.tokens.len() as f64);
    }

    #[test]
    fn arbitrary_text_yields_normalized_tokens(text in "\\PC{0,64}") {
        for lang in ["en", "de"] {
            let result = analyze(&text, &Options::new().lang(lang)).unwrap();
            prop_assert!(!result.tokens.is_empty());
            for token in &result.tokens {
                prop_assert!(!token.contains(' ') && !token.contains('-'));
                prop_assert!(token.chars().all(|c| !c.is_uppercase()));
            }
        }
    }
}
