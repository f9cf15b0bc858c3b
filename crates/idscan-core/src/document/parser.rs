//! Rule-based document parser: runs every field extractor and applies the
//! completeness rule.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::classify::classify;
use super::normalize::NormalizedText;
use super::rules::{
    DocumentNumberExtractor, ExpiryExtractor, FieldExtractor, NameExtractor, NameSource,
    NumberShape,
};
use super::{DocumentExtractor, ExtractionOutcome};
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::document::{DocumentType, Expiry, ExtractedRecord};

/// Everything one extraction run found, complete or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Classified document type (`None` when unknown).
    pub document_type: Option<DocumentType>,

    /// Formatted holder name.
    pub name: Option<String>,

    /// Rule that produced the name.
    pub name_source: Option<NameSource>,

    /// Document identifier.
    pub document_number: Option<String>,

    /// Identifier shape that matched.
    pub number_shape: Option<NumberShape>,

    /// OCR text each field was read from (name, number, expiry).
    pub matched_text: MatchedText,

    /// Expiration found in the text (or `Never` for PAN documents).
    pub expiration_date: Option<Expiry>,

    /// Extraction warnings.
    pub warnings: Vec<String>,

    /// Processing time in microseconds.
    pub processing_time_us: u64,
}

/// Source text behind each extracted field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedText {
    pub name: Option<String>,
    pub document_number: Option<String>,
    pub expiration_date: Option<String>,
}

impl ExtractionReport {
    /// Whether the completeness rule holds.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.document_number.is_some() && !self.missing_expiry()
    }

    fn missing_expiry(&self) -> bool {
        self.expiration_date.is_none() && self.document_type.is_none_or(|t| t.has_expiry())
    }

    /// Names of the fields that keep this report from being complete.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.document_number.is_none() {
            missing.push("document_number");
        }
        if self.missing_expiry() {
            missing.push("expiration_date");
        }
        missing
    }

    /// Apply the completeness rule: all of name, number and expiry (expiry
    /// optional for PAN, defaulting to [`Expiry::Never`]) or no data at all.
    pub fn into_outcome(self) -> ExtractionOutcome {
        if !self.is_complete() {
            return Err(ExtractionError::NoDataFound);
        }

        match (self.name, self.document_number) {
            (Some(name), Some(document_number)) => Ok(ExtractedRecord {
                name,
                document_number,
                expiration_date: self.expiration_date.unwrap_or(Expiry::Never),
                document_type: self.document_type,
            }),
            _ => Err(ExtractionError::NoDataFound),
        }
    }
}

/// Rule-based document parser.
pub struct RuleBasedExtractor {
    names: NameExtractor,
    numbers: DocumentNumberExtractor,
    expiry: ExpiryExtractor,
}

impl RuleBasedExtractor {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            names: NameExtractor::new().with_generic_fallback(config.generic_name_fallback),
            numbers: DocumentNumberExtractor::new(),
            expiry: ExpiryExtractor::new(),
        }
    }

    /// Set whether any run of capitalized words may be taken as a name.
    pub fn with_generic_name_fallback(mut self, enabled: bool) -> Self {
        self.names = NameExtractor::new().with_generic_fallback(enabled);
        self
    }

    /// Run every extractor and report what was found.
    pub fn analyze(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let normalized = NormalizedText::new(text);
        if normalized.is_empty() {
            warnings.push("OCR text is empty".to_string());
        }

        let document_type = classify(&normalized);
        if document_type.is_none() {
            warnings.push("Could not determine document type".to_string());
        }

        let name = self.names.extract(&normalized);
        match &name {
            Some(m) if m.rule == NameSource::Generic => {
                warn!("Name '{}' taken from generic capitalized-word fallback", m.value);
                warnings.push(format!(
                    "Name '{}' was guessed from capitalized words, not a labelled field",
                    m.value
                ));
            }
            Some(m) => debug!("Name '{}' found by {:?}", m.value, m.rule),
            None => warnings.push("Could not extract holder name".to_string()),
        }

        let number = self.numbers.extract(&normalized);
        match &number {
            Some(m) => debug!("Document number '{}' matched {:?} shape", m.value, m.rule),
            None => warnings.push("Could not extract document number".to_string()),
        }

        let expiry = self.expiry.extract(&normalized);
        match &expiry {
            Some(m) => debug!("Expiry {} found by {:?}", m.value, m.rule),
            None => warnings.push("Could not extract expiration date".to_string()),
        }

        let matched_text = MatchedText {
            name: name.as_ref().map(|m| m.source.clone()),
            document_number: number.as_ref().map(|m| m.source.clone()),
            expiration_date: expiry
                .as_ref()
                .map(|m| m.source.clone())
                .filter(|source| !source.is_empty()),
        };

        ExtractionReport {
            document_type,
            matched_text,
            name_source: name.as_ref().map(|m| m.rule),
            name: name.map(|m| m.value),
            number_shape: number.as_ref().map(|m| m.rule),
            document_number: number.map(|m| m.value),
            expiration_date: expiry.map(|m| m.value),
            warnings,
            processing_time_us: start.elapsed().as_micros() as u64,
        }
    }
}

impl Default for RuleBasedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for RuleBasedExtractor {
    fn extract(&self, text: &str) -> ExtractionOutcome {
        info!("Extracting document fields from {} characters of text", text.len());

        let report = self.analyze(text);
        if !report.is_complete() {
            info!("No document data found, missing {:?}", report.missing_fields());
        }
        report.into_outcome()
    }
}

/// Extract a document record from OCR text with default settings.
pub fn extract_document(text: &str) -> ExtractionOutcome {
    RuleBasedExtractor::new().extract(text)
}
