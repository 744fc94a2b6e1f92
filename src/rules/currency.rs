//! Currency canonicalization: "SYMBOL amount" with Swiss grouping and a
//! ".-" placeholder when no cents are given.

use std::collections::HashSet;

use fancy_regex::{escape, Captures, Regex};

use crate::rules::number;

/// Symbols recognized when the caller supplies no set of their own.
pub const DEFAULT_SYMBOLS: [&str; 5] = ["EUR", "USD", "€", "$", "CHF"];

/// An amount as it looks after standardization: plain digits, optionally
/// already grouped, optionally a decimal part or the ".-" placeholder.
/// Accepting the placeholder keeps a second pass from stacking suffixes.
const AMOUNT: &str = r"\d+(?:'\d{3})*(?:\.(?:\d+|-))?";

/// Builds the default symbol set.
pub fn default_symbols() -> HashSet<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Rewrites every currency mention to the canonical "SYMBOL amount" form.
///
/// Both orderings are recognized: "10 USD" and "USD 10" (with or without
/// the space) each become "USD 10.-". Every occurrence is rewritten
/// independently, so several distinct amounts sharing one symbol all come
/// out correctly. Symbols are visited in sorted order to keep multi-symbol
/// output deterministic; for a single mention the order cannot matter.
pub fn format(text: &str, symbols: &HashSet<String>) -> String {
    let mut ordered: Vec<&String> = symbols.iter().collect();
    ordered.sort();

    let mut text = text.to_string();
    for symbol in ordered {
        text = rewrite_symbol(&text, symbol);
    }
    text
}

fn rewrite_symbol(text: &str, symbol: &str) -> String {
    let sym = escape(symbol);
    let Ok(number_then_symbol) = Regex::new(&format!(r"({}) ?{}", AMOUNT, sym)) else {
        return text.to_string();
    };
    let Ok(symbol_then_number) = Regex::new(&format!(r"{} ?({})", sym, AMOUNT)) else {
        return text.to_string();
    };

    let text = number_then_symbol.replace_all(text, |caps: &Captures| {
        format!("{} {}", symbol, canonical_amount(&caps[1]))
    });
    symbol_then_number
        .replace_all(&text, |caps: &Captures| {
            format!("{} {}", symbol, canonical_amount(&caps[1]))
        })
        .into_owned()
}

/// Appends the ".-" placeholder when the amount has no decimal part, then
/// groups the integer digits. Never stacks a second suffix.
fn canonical_amount(amount: &str) -> String {
    if amount.contains('.') {
        number::group(amount)
    } else {
        number::group(&format!("{}.-", amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        format(text, &default_symbols())
    }

    #[test]
    fn test_symbol_before_number() {
        assert_eq!(fmt("USD 10"), "USD 10.-");
    }

    #[test]
    fn test_symbol_after_number() {
        assert_eq!(fmt("10 USD"), "USD 10.-");
    }

    #[test]
    fn test_no_space_between() {
        assert_eq!(fmt("10USD"), "USD 10.-");
        assert_eq!(fmt("€10"), "€ 10.-");
    }

    #[test]
    fn test_existing_decimal_kept() {
        assert_eq!(fmt("USD 10.50"), "USD 10.50");
    }

    #[test]
    fn test_no_second_placeholder() {
        assert_eq!(fmt("USD 10.-"), "USD 10.-");
    }

    #[test]
    fn test_amount_is_grouped() {
        assert_eq!(fmt("1234567 CHF"), "CHF 1'234'567.-");
    }

    #[test]
    fn test_already_grouped_amount() {
        assert_eq!(fmt("CHF 1'234'567.-"), "CHF 1'234'567.-");
    }

    #[test]
    fn test_two_amounts_same_symbol() {
        assert_eq!(
            fmt("Erst 10 USD, dann 2000 USD"),
            "Erst USD 10.-, dann USD 2'000.-"
        );
    }

    #[test]
    fn test_both_orderings_in_one_text() {
        assert_eq!(fmt("USD 5 oder 7 USD"), "USD 5.- oder USD 7.-");
    }

    #[test]
    fn test_two_different_symbols() {
        assert_eq!(fmt("10 EUR sind etwa 11 CHF"), "EUR 10.- sind etwa CHF 11.-");
    }

    #[test]
    fn test_unknown_symbol_untouched() {
        assert_eq!(fmt("10 GBP"), "10 GBP");
    }

    #[test]
    fn test_custom_symbol_set() {
        let symbols: HashSet<String> = ["Fr."].iter().map(|s| s.to_string()).collect();
        assert_eq!(format("Fr. 25", &symbols), "Fr. 25.-");
    }

    #[test]
    fn test_no_currency_fixed_point() {
        let text = "Ein Text ohne Geldbetrag.";
        assert_eq!(fmt(text), text);
    }
}
