//! OCR text normalization.

/// OCR text prepared for pattern matching.
///
/// Keeps three views of the same input: the raw text (number and date
/// patterns are case-insensitive and run on it), a flattened uppercase view
/// with every whitespace run collapsed to one space, and the uppercase text
/// split into trimmed, whitespace-collapsed lines for positional heuristics.
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    raw: &'a str,
    flat: String,
    lines: Vec<String>,
}

impl<'a> NormalizedText<'a> {
    pub fn new(raw: &'a str) -> Self {
        let upper = raw.to_uppercase();
        let flat = collapse_whitespace(&upper);
        let lines = upper.lines().map(collapse_whitespace).collect();

        Self { raw, flat, lines }
    }

    /// The original OCR text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Uppercase text on a single line with single spaces.
    pub fn flat(&self) -> &str {
        &self.flat
    }

    /// Uppercase lines, trimmed, in reading order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flattens_and_uppercases() {
        let text = NormalizedText::new("  Driving\tLicense \n\n name:  Jane   Doe\r\n");
        assert_eq!(text.flat(), "DRIVING LICENSE NAME: JANE DOE");
        assert_eq!(
            text.lines(),
            &["DRIVING LICENSE", "", "NAME: JANE DOE"]
        );
    }

    #[test]
    fn test_raw_is_untouched() {
        let raw = "dl no: ab12345678";
        assert_eq!(NormalizedText::new(raw).raw(), raw);
    }

    #[test]
    fn test_empty_input() {
        let text = NormalizedText::new("");
        assert!(text.is_empty());
        assert!(text.lines().is_empty());

        assert!(NormalizedText::new(" \n\t ").is_empty());
    }
}
