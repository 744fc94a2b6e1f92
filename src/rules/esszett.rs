//! Esszett elimination: Swiss German spells "ß" as "ss".

/// Replaces every "ß" with "ss". Nothing else changes, and a second pass is
/// a no-op since no "ß" survives the first.
pub fn convert(text: &str) -> String {
    text.replace('ß', "ss")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_esszett() {
        assert_eq!(convert("Straße"), "Strasse");
    }

    #[test]
    fn test_multiple_esszett() {
        assert_eq!(convert("Größe und Maße"), "Grösse und Masse");
    }

    #[test]
    fn test_idempotent() {
        let once = convert("Fußgängerstraße");
        assert_eq!(convert(&once), once);
    }

    #[test]
    fn test_no_esszett_fixed_point() {
        let text = "Schon schweizerisch";
        assert_eq!(convert(text), text);
    }
}
