//! The individual rewrite rules. Each rule is a pure `&str -> String`
//! transform; composition order is the pipeline's concern.

pub mod apostrophe;
pub mod currency;
pub mod esszett;
pub mod number;
pub mod quotes;
pub mod time;
pub mod vocabulary;

pub use currency::default_symbols;
pub use vocabulary::{Vocabulary, VocabularyError};
