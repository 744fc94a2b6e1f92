//! Whole-word vocabulary substitution.

use std::collections::HashMap;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Error, Debug, PartialEq)]
pub enum VocabularyError {
    #[error("vocabulary contains no entries")]
    Empty,

    #[error("vocabulary key {0:?} can never match a word token")]
    UnmatchableKey(String),
}

/// An immutable mapping from German words to their Swiss equivalents.
///
/// Construction validates the entries up front: an empty mapping or a key
/// that word segmentation can never produce (empty, or containing
/// whitespace) is rejected, because such entries would make substitution
/// silently incomplete.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: HashMap<String, String>,
}

impl Vocabulary {
    pub fn new(entries: HashMap<String, String>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        for key in entries.keys() {
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return Err(VocabularyError::UnmatchableKey(key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// A small default word list so the tool is usable without a
    /// vocabulary file.
    pub fn builtin() -> Self {
        let entries = [
            ("Fahrrad", "Velo"),
            ("Fahrräder", "Velos"),
            ("Abitur", "Matura"),
            ("Sahne", "Rahm"),
            ("Brötchen", "Weggli"),
            ("Fahrkarte", "Billett"),
            ("Fahrkarten", "Billette"),
            ("Straßenbahn", "Tram"),
            ("Strassenbahn", "Tram"),
            ("Kneipe", "Beiz"),
            ("Junge", "Bub"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replaces whole-word occurrences of vocabulary keys with their targets.
///
/// The text is segmented into word tokens, and only exact token matches
/// are replaced, so a key never fires inside a longer word
/// ("Fahrradweg" survives a "Fahrrad" entry). Separators and punctuation
/// come through untouched.
pub fn substitute(text: &str, vocabulary: &Vocabulary) -> String {
    text.split_word_bounds()
        .map(|token| vocabulary.get(token).unwrap_or(token))
        .collect()
}
