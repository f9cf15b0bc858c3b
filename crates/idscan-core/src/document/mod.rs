//! Identity document field extraction.

pub mod classify;
pub mod normalize;
mod parser;
pub mod rules;

pub use classify::{classify, has_pan_signature};
pub use normalize::NormalizedText;
pub use parser::{extract_document, ExtractionReport, MatchedText, RuleBasedExtractor};

use crate::error::ExtractionError;
use crate::models::document::ExtractedRecord;

/// Outcome of one extraction: a complete record or [`ExtractionError::NoDataFound`].
pub type ExtractionOutcome = std::result::Result<ExtractedRecord, ExtractionError>;

/// Trait for document field extractors.
///
/// Implementations are pure: the same text always yields the same outcome.
pub trait DocumentExtractor {
    /// Extract a complete record from OCR text.
    fn extract(&self, text: &str) -> ExtractionOutcome;
}
