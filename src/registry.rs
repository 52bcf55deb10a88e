// src/registry.rs

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::analyzer::Resolved;
use crate::error::{Result, SentimentError};
use crate::lexicon::Lexicon;
use crate::negation::NegationList;
use crate::options::Options;
use crate::pattern::Alphabet;
use crate::result::AnalysisResult;

lazy_static! {
    /// Languages shipped with the crate, parsed from the embedded `data/` files.
    static ref BUILTIN: Registry = {
        let english = Language::new(
            Alphabet::latin().clone(),
            embedded_lexicon("data/en/afinn.json", include_str!("../data/en/afinn.json")),
            embedded_negations("data/en/negations.json", include_str!("../data/en/negations.json")),
        )
        .with_category(
            "finance",
            embedded_lexicon(
                "data/en/categories/finance.json",
                include_str!("../data/en/categories/finance.json"),
            ),
        );

        let german = Language::new(
            Alphabet::german().clone(),
            embedded_lexicon("data/de/afinn.json", include_str!("../data/de/afinn.json")),
            embedded_negations("data/de/negations.json", include_str!("../data/de/negations.json")),
        );

        Registry::new()
            .with_language("en", english)
            .with_language("de", german)
    };
}

// Languages outside the registry have nothing to negate with.
static NO_NEGATIONS: Lazy<NegationList> = Lazy::new(NegationList::default);

fn embedded_lexicon(name: &str, json: &str) -> Lexicon {
    Lexicon::from_json(name, json).unwrap_or_else(|e| panic!("Embedded lexicon error: {}", e))
}

fn embedded_negations(name: &str, json: &str) -> NegationList {
    NegationList::from_json(name, json).unwrap_or_else(|e| panic!("Embedded negation list error: {}", e))
}

/// Everything needed to score phrases in one language.
#[derive(Debug, Clone)]
pub struct Language {
    alphabet: Alphabet,
    lexicon: Lexicon,
    negations: NegationList,
    categories: HashMap<String, Lexicon>,
}

impl Language {
    pub fn new(alphabet: Alphabet, lexicon: Lexicon, negations: NegationList) -> Self {
        Language {
            alphabet,
            lexicon,
            negations,
            categories: HashMap::new(),
        }
    }

    pub fn with_category(mut self, name: impl Into<String>, lexicon: Lexicon) -> Self {
        self.categories.insert(name.into(), lexicon);
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn negations(&self) -> &NegationList {
        &self.negations
    }

    pub fn category(&self, name: &str) -> Option<&Lexicon> {
        self.categories.get(name)
    }
}

/// Lexicons, negation lists and alphabets keyed by language code.
///
/// A registry is filled once by whatever loads the lexicon data and is only
/// read afterwards; every analysis builds its own merged lexicon from it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: HashMap<String, Language>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of embedded languages (`en` with a `finance` category, `de`).
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn with_language(mut self, code: impl Into<String>, language: Language) -> Self {
        self.languages.insert(code.into(), language);
        self
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    /// Known language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Category names available for `lang`, sorted. Empty for unknown languages.
    pub fn categories(&self, lang: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .language(lang)
            .map(|l| l.categories.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Resolves `options` into the alphabet, negation list and merged lexicon
    /// for one analysis.
    ///
    /// Layers are applied base, then category, then overrides; later layers
    /// win. `strict` drops the base layer. A language missing from the
    /// registry is accepted only when `strict` is set or overrides are given,
    /// and then tokenizes with the Latin alphabet and has no negations.
    pub fn resolve(&self, options: &Options) -> Result<Resolved<'_>> {
        options.validate()?;
        let lang = options.lang.as_str();

        let language = self.language(lang);
        if language.is_none() && !options.strict && !options.has_overrides() {
            return Err(SentimentError::UnsupportedLanguage {
                lang: lang.to_string(),
            });
        }

        let mut layers: Vec<&Lexicon> = Vec::with_capacity(2);
        if let Some(language) = language.filter(|_| !options.strict) {
            layers.push(&language.lexicon);
        }
        if let Some(category) = &options.category {
            let lexicon = language
                .and_then(|l| l.category(category))
                .ok_or_else(|| SentimentError::UnsupportedCategory {
                    lang: lang.to_string(),
                    category: category.clone(),
                })?;
            layers.push(lexicon);
        }

        let alphabet = language.map_or(Alphabet::latin(), Language::alphabet);
        let unreachable = options.unreachable_overrides(alphabet);
        if !unreachable.is_empty() {
            debug!(lang, ?unreachable, "override words never produced by the tokenizer");
        }

        // Registry layers are shared until something has to be merged into them.
        let mut lexicon = match layers.as_slice() {
            [] => Cow::Owned(Lexicon::new()),
            [only] => Cow::Borrowed(*only),
            [first, rest @ ..] => {
                let mut merged = (*first).clone();
                for layer in rest {
                    merged.extend_from(layer);
                }
                Cow::Owned(merged)
            }
        };
        if let Some(overrides) = &options.overrides {
            lexicon.to_mut().extend_from(overrides);
        }

        debug!(
            lang,
            known = language.is_some(),
            category = options.category.as_deref(),
            strict = options.strict,
            overrides = options.overrides.as_ref().map_or(0, Lexicon::len),
            entries = lexicon.len(),
            "lexicon resolved"
        );

        Ok(Resolved {
            alphabet,
            negations: language.map_or(&*NO_NEGATIONS, Language::negations),
            lexicon,
        })
    }

    /// Resolves `options` against this registry and analyzes `phrase`.
    pub fn analyze(&self, phrase: &str, options: &Options) -> Result<AnalysisResult> {
        Ok(self.resolve(options)?.analyze(phrase))
    }
}
