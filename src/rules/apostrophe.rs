//! Apostrophe conversion for the Italian-locale variant.

/// Replaces the typographic closing apostrophe (U+2019) with the straight
/// apostrophe.
pub fn convert(text: &str) -> String {
    text.replace('\u{2019}', "'")
}
