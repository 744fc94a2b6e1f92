//! Vocabulary loading. The pipeline itself never touches the filesystem;
//! this module turns a vocabulary file into a validated [`Vocabulary`]
//! before the pipeline runs.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::rules::{Vocabulary, VocabularyError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("vocabulary file is not a JSON object of words: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] VocabularyError),
}

/// Loads a vocabulary from a JSON file mapping German words to their Swiss
/// equivalents, e.g. `{"Fahrrad": "Velo"}`. A missing or malformed file is
/// an error; substitution is never silently skipped.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let entries: HashMap<String, String> = serde_json::from_str(&content)?;
    Ok(Vocabulary::new(entries)?)
}
