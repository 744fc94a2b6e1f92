//! Fixed-order composition of the rewrite rules.

use std::collections::HashSet;

use crate::rules::{apostrophe, currency, esszett, number, quotes, time, vocabulary, Vocabulary};

/// Target locale of an adaptation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    SwissGerman,
    Italian,
}

impl Language {
    /// Maps common language tags to a [`Language`]. Unknown tags map to
    /// `None`; callers treat that as pass-through, not as an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "swiss" | "de-ch" | "de_ch" | "gsw" => Some(Language::SwissGerman),
            "italian" | "it-ch" | "it_ch" => Some(Language::Italian),
            _ => None,
        }
    }
}

/// Runs the adaptation stages over a text.
///
/// The Swiss German stage order is load-bearing: quotes first, then the
/// currency chain (standardize, canonicalize, group) while digits and
/// punctuation are still in their original context, then esszett and
/// vocabulary, and time conversion last so no earlier rewrite can sit
/// inside an hour:minute span.
pub struct Pipeline {
    vocabulary: Vocabulary,
    currency_symbols: HashSet<String>,
}

impl Pipeline {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            currency_symbols: currency::default_symbols(),
        }
    }

    /// Replaces the recognized currency symbols.
    pub fn with_currency_symbols(mut self, symbols: HashSet<String>) -> Self {
        self.currency_symbols = symbols;
        self
    }

    /// Adapts a text for the given locale.
    pub fn adapt(&self, text: &str, language: Language) -> String {
        match language {
            Language::SwissGerman => self.adapt_swiss(text),
            Language::Italian => apostrophe::convert(text),
        }
    }

    /// Adapts a text for a language tag. Unknown tags leave the text
    /// unchanged.
    pub fn adapt_tagged(&self, text: &str, tag: &str) -> String {
        match Language::from_tag(tag) {
            Some(language) => self.adapt(text, language),
            None => text.to_string(),
        }
    }

    fn adapt_swiss(&self, text: &str) -> String {
        let text = quotes::convert(text);
        let text = number::standardize(&text);
        let text = currency::format(&text, &self.currency_symbols);
        let text = number::group_numbers(&text);
        let text = esszett::convert(&text);
        let text = vocabulary::substitute(&text, &self.vocabulary);
        time::convert(&text)
    }
}
