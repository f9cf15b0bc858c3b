//! Holder name extraction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{FORMATTED_NAME, GENERIC_NAME, LABELLED_NAME, NAME_FIELD, NAME_LINE};
use super::{FieldExtractor, FieldMatch};
use crate::document::classify::has_pan_signature;
use crate::document::normalize::NormalizedText;

/// Which heuristic produced a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    /// First name-shaped line below a PAN card header.
    PanHeader,
    /// `GIVEN NAME(S)`, `SURNAME`, `NOM` or `PRENOM` label.
    LabelledField,
    /// `NAME` label.
    NameField,
    /// Any run of 2-4 capitalized words. Prone to false positives.
    Generic,
}

type NameRule = fn(&NormalizedText<'_>) -> Option<String>;

/// Fallback rules, tried in order after the PAN header rule.
const NAME_RULES: &[(NameSource, NameRule)] = &[
    (NameSource::LabelledField, labelled_field),
    (NameSource::NameField, name_field),
    (NameSource::Generic, generic_run),
];

/// Lines on a PAN card that are never the holder's name.
const PAN_BOILERPLATE: &[&str] = &[
    "INCOME TAX DEPARTMENT",
    "PERMANENT ACCOUNT NUMBER",
    "GOVT",
    "GOVERNMENT",
];

/// Holder name extractor.
pub struct NameExtractor {
    generic_fallback: bool,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            generic_fallback: true,
        }
    }

    /// Set whether any run of capitalized words may be taken as a name.
    pub fn with_generic_fallback(mut self, enabled: bool) -> Self {
        self.generic_fallback = enabled;
        self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = FieldMatch<String, NameSource>;

    fn extract(&self, text: &NormalizedText<'_>) -> Option<Self::Output> {
        if has_pan_signature(text.flat()) {
            if let Some(line) = line_after_pan_header(text) {
                return Some(FieldMatch::new(format_name(line), NameSource::PanHeader, line));
            }
            debug!("PAN signature present but no name below the header");
        }

        for (source, rule) in NAME_RULES {
            if *source == NameSource::Generic && !self.generic_fallback {
                continue;
            }

            let Some(raw) = rule(text) else {
                continue;
            };

            let name = format_name(&raw);
            if is_plausible_name(&name) {
                return Some(FieldMatch::new(name, *source, raw));
            }
            debug!("Rejected {:?} name candidate '{}'", source, name);
        }

        None
    }
}

/// Title-case every whitespace-separated word ("JOHN SMITH" -> "John Smith").
pub fn format_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A formatted name is plausible when it is 3 to 49 characters long and
/// starts with an uppercase letter followed by a lowercase one.
pub fn is_plausible_name(name: &str) -> bool {
    let len = name.chars().count();
    len > 2 && len < 50 && FORMATTED_NAME.is_match(name)
}

fn is_pan_boilerplate(line: &str) -> bool {
    PAN_BOILERPLATE.iter().any(|phrase| line.contains(phrase))
}

fn line_after_pan_header<'t>(text: &'t NormalizedText<'_>) -> Option<&'t str> {
    let lines = text.lines();
    let header = lines.iter().position(|line| {
        line.contains("PERMANENT ACCOUNT NUMBER") || line.contains("INCOME TAX DEPARTMENT")
    })?;

    lines[header + 1..]
        .iter()
        .filter(|line| !is_pan_boilerplate(line))
        .find(|line| NAME_LINE.is_match(line))
        .map(String::as_str)
}

fn labelled_field(text: &NormalizedText<'_>) -> Option<String> {
    first_line_capture(text, |line| LABELLED_NAME.captures(line))
}

fn name_field(text: &NormalizedText<'_>) -> Option<String> {
    first_line_capture(text, |line| NAME_FIELD.captures(line))
}

fn generic_run(text: &NormalizedText<'_>) -> Option<String> {
    GENERIC_NAME
        .captures(text.flat())
        .map(|caps| caps[1].trim().to_string())
}

fn first_line_capture<'t, F>(text: &'t NormalizedText<'_>, captures: F) -> Option<String>
where
    F: Fn(&'t str) -> Option<regex::Captures<'t>>,
{
    text.lines()
        .iter()
        .find_map(|line| captures(line.as_str()))
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(raw: &str) -> Option<(String, NameSource)> {
        NameExtractor::new()
            .extract(&NormalizedText::new(raw))
            .map(|m| (m.value, m.rule))
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("JOHN SMITH"), "John Smith");
        assert_eq!(format_name("  o'neil   MARY-ANN "), "O'neil Mary-ann");
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn test_plausible_name() {
        assert!(is_plausible_name("Jane Doe"));
        assert!(!is_plausible_name("Jo"));
        assert!(!is_plausible_name("J.r Smith"));
        assert!(!is_plausible_name(&"Abc ".repeat(13)));
    }

    #[test]
    fn test_pan_name_below_header() {
        let text = "INCOME TAX DEPARTMENT\nGOVT. OF INDIA\nPERMANENT ACCOUNT NUMBER\nRAHUL KUMAR\nAAAPL1234C";
        assert_eq!(
            extract(text),
            Some(("Rahul Kumar".to_string(), NameSource::PanHeader))
        );
    }

    #[test]
    fn test_pan_without_name_line_falls_through() {
        let text = "AAAPL1234C\nNAME: ANITA SHARMA\nINCOME TAX DEPARTMENT";
        assert_eq!(
            extract(text),
            Some(("Anita Sharma".to_string(), NameSource::NameField))
        );
    }

    #[test]
    fn test_labelled_field() {
        let text = "PASSPORT\nSURNAME: DOE\nGIVEN NAMES: JANE";
        assert_eq!(
            extract(text),
            Some(("Doe".to_string(), NameSource::LabelledField))
        );
    }

    #[test]
    fn test_name_field_keeps_short_parts() {
        let text = "DRIVING LICENSE\nNAME: NG WEI\nDL NO: AB1234567890";
        assert_eq!(
            extract(text),
            Some(("Ng Wei".to_string(), NameSource::NameField))
        );

        assert_eq!(
            extract("NAME: JANE A DOE"),
            Some(("Jane A Doe".to_string(), NameSource::NameField))
        );
        assert_eq!(
            extract("GIVEN NAMES: MARIA DE LA CRUZ"),
            Some(("Maria De La Cruz".to_string(), NameSource::LabelledField))
        );
    }

    #[test]
    fn test_name_field_stays_on_its_line() {
        let text = "NAME: JANE DOE\nDL NO: AB1234567890";
        assert_eq!(
            extract(text),
            Some(("Jane Doe".to_string(), NameSource::NameField))
        );
    }

    #[test]
    fn test_generic_fallback() {
        let text = "maria garcia lopez\n2024";
        assert_eq!(
            extract(text),
            Some(("Maria Garcia Lopez".to_string(), NameSource::Generic))
        );

        let strict = NameExtractor::new()
            .with_generic_fallback(false)
            .extract(&NormalizedText::new(text));
        assert!(strict.is_none());
    }

    #[test]
    fn test_rejected_candidate_continues() {
        // "J.R" after the NAME label is captured but rejected.
        let text = "NAME: J.R\n12345\nMARY ANN SMITH";
        assert_eq!(
            extract(text),
            Some(("Mary Ann Smith".to_string(), NameSource::Generic))
        );
    }

    #[test]
    fn test_no_name() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("12345 678 90"), None);
    }
}
