//! # Swissify
//!
//! Converts German-language text into Swiss German orthographic and
//! typographic conventions: guillemet quotes, "HH.MM" times, canonical
//! "SYMBOL amount" currency with apostrophe thousands grouping, "ß" → "ss",
//! and whole-word vocabulary substitution. A secondary Italian variant
//! straightens typographic apostrophes.
//!
//! ```rust
//! use swissify::{Language, Pipeline, Vocabulary};
//!
//! let pipeline = Pipeline::new(Vocabulary::builtin());
//! let swiss = pipeline.adapt("„Hallo“ um 10:30 für 10 USD", Language::SwissGerman);
//! assert_eq!(swiss, "«Hallo» um 10.30 für USD 10.-");
//! ```

pub mod input;
pub mod pipeline;
pub mod rules;

pub use input::{load_vocabulary, LoadError};
pub use pipeline::{Language, Pipeline};
pub use rules::{Vocabulary, VocabularyError};
