//! Quotation-mark conversion to Swiss guillemets.

use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// German low-high pair: „Wort“.
    static ref GERMAN_PAIR_RE: Regex = Regex::new("„(.+?)“").unwrap();
    /// Typographic curly pair: “Wort”.
    static ref CURLY_PAIR_RE: Regex = Regex::new("“(.+?)”").unwrap();
    /// Straight double pair.
    static ref DOUBLE_PAIR_RE: Regex = Regex::new(r#""(.+?)""#).unwrap();
    /// Straight single pair. The word-edge guards keep an apostrophe inside
    /// a word (don't, geht's) from opening or closing a pair.
    static ref SINGLE_PAIR_RE: Regex = Regex::new(r"(?<!\w)'(.+?)'(?!\w)").unwrap();
}

/// Rewrites balanced quotation pairs to «…», keeping the enclosed content
/// verbatim. Matching is non-greedy, so adjacent quoted spans convert
/// independently instead of merging.
pub fn convert(text: &str) -> String {
    let text = GERMAN_PAIR_RE.replace_all(text, "«$1»");
    let text = CURLY_PAIR_RE.replace_all(&text, "«$1»");
    let text = DOUBLE_PAIR_RE.replace_all(&text, "«$1»");
    SINGLE_PAIR_RE.replace_all(&text, "«$1»").into_owned()
}
