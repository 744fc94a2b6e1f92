//! Time notation: "HH:MM" becomes "HH.MM".

use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(r"\b(\d{2}):(\d{2})\b").unwrap();
}

/// Rewrites the colon of a clock time to a period. The pattern alone would
/// also accept impossible values like "25:30", so the hour and minute are
/// range-checked (00–23, 00–59) and anything out of range passes through
/// unchanged. Colons in other contexts never match.
pub fn convert(text: &str) -> String {
    TIME_RE
        .replace_all(text, |caps: &Captures| {
            let hour = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            let minute = caps[2].parse::<u32>().unwrap_or(u32::MAX);
            if hour <= 23 && minute <= 59 {
                format!("{}.{}", &caps[1], &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
