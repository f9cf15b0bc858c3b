//! Rule-based field extractors for identity documents.

pub mod expiry;
pub mod name;
pub mod number;
pub mod patterns;

pub use expiry::{parse_date, ExpiryExtractor, ExpiryRule, DATE_LAYOUTS};
pub use name::{format_name, is_plausible_name, NameExtractor, NameSource};
pub use number::{DocumentNumberExtractor, NumberShape};

use super::normalize::NormalizedText;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from normalized text.
    fn extract(&self, text: &NormalizedText<'_>) -> Option<Self::Output>;
}

/// An extracted value together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<T, R> {
    /// Extracted value.
    pub value: T,
    /// Rule that matched.
    pub rule: R,
    /// Source text that was matched.
    pub source: String,
}

impl<T, R> FieldMatch<T, R> {
    pub fn new(value: T, rule: R, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            source: source.into(),
        }
    }
}
