//! Number standardization and Swiss thousands grouping.

use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// A single space or period sandwiched between digits is a grouping
    /// separator, not part of the number.
    static ref GROUP_SEPARATOR_RE: Regex = Regex::new(r"(\d)[\s.](?=\d)").unwrap();
    /// Comma followed by exactly three digits and then a non-digit (or end
    /// of text). Must run before the decimal-comma pass, otherwise "1,234"
    /// would be read as "1.234".
    static ref THOUSANDS_COMMA_RE: Regex = Regex::new(r"(\d),(?=\d{3}(?!\d))").unwrap();
    /// Any comma still sitting between digits is a decimal comma.
    static ref DECIMAL_COMMA_RE: Regex = Regex::new(r"(\d),(?=\d)").unwrap();
    /// Maximal numeric token: integer digits with an optional decimal part.
    static ref NUMBER_RE: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Collapses digit-group separators and normalizes decimal commas so that
/// every number in the text uses plain digits with at most one period.
///
/// The three passes are ordered: separator removal first, then thousands
/// commas, then the remaining commas become decimal points. Non-numeric
/// text passes through untouched.
pub fn standardize(text: &str) -> String {
    let text = GROUP_SEPARATOR_RE.replace_all(text, "$1");
    let text = THOUSANDS_COMMA_RE.replace_all(&text, "$1");
    DECIMAL_COMMA_RE.replace_all(&text, "$1.").into_owned()
}

/// Formats a single number with Swiss apostrophe thousands separators.
///
/// Existing apostrophes are stripped first, so regrouping an already
/// grouped number is a no-op. Only the integer portion is grouped; digits
/// after the first period (decimal part or the ".-" placeholder) are kept
/// verbatim. Numbers shorter than four digits come back unchanged.
pub fn group(number: &str) -> String {
    let stripped = number.replace('\'', "");
    let (integer, rest) = match stripped.split_once('.') {
        Some((integer, rest)) => (integer, Some(rest)),
        None => (stripped.as_str(), None),
    };

    let grouped = group_digits(integer);
    match rest {
        Some(rest) => format!("{}.{}", grouped, rest),
        None => grouped,
    }
}

/// Inserts an apostrophe before every group of three digits, counted from
/// the least-significant end. Leading zeros are ordinary digits.
fn group_digits(digits: &str) -> String {
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        let remaining = bytes.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push('\'');
        }
        out.push(b as char);
    }
    out
}

/// Applies [`group`] to every numeric token in a text. Apostrophes already
/// present split the digit run, so grouped numbers are left alone.
pub fn group_numbers(text: &str) -> String {
    NUMBER_RE
        .replace_all(text, |caps: &fancy_regex::Captures| group(&caps[0]))
        .into_owned()
}
