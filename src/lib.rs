// src/lib.rs

//! AFINN-style sentiment scoring for short phrases.
//!
//! A phrase is tokenized for its language, checked against the language's
//! negation words and scored against a lexicon merged from the base language
//! lexicon, an optional category lexicon and caller overrides.
//!
//! ```text
//! phrase → tokenize → tokens ─┬→ detect_negations ─┐
//!                             └→ score ────────────┴→ AnalysisResult
//! ```
//!
//! Any negation word switches scoring off for the whole phrase.

pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod negation;
pub mod options;
pub mod pattern;
pub mod registry;
pub mod result;
pub mod scorer;
pub mod tokenizer;

pub use analyzer::{analyze, Resolved};
pub use error::{Result, SentimentError};
pub use lexicon::Lexicon;
pub use negation::{detect_negations, NegationList};
pub use options::{Options, DEFAULT_LANGUAGE};
pub use pattern::Alphabet;
pub use registry::{Language, Registry};
pub use result::AnalysisResult;
pub use scorer::{score, Scored};
pub use tokenizer::tokenize;
