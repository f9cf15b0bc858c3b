//! Core library for identity document OCR.
//!
//! This crate provides:
//! - Document type classification (PAN card, driving license, passport)
//! - Holder name, document number and expiration date extraction from OCR text
//! - The completeness rule that turns partial matches into a record or
//!   `NO_DATA_FOUND`
//! - An OCR seam (`TextRecognizer`) and an image scanning pipeline

pub mod document;
pub mod error;
pub mod models;
pub mod ocr;

pub use document::{
    classify, extract_document, DocumentExtractor, ExtractionOutcome, ExtractionReport,
    MatchedText, NormalizedText, RuleBasedExtractor,
};
pub use error::{ErrorKind, ExtractionError, IdscanError, OcrError, Result};
pub use models::config::{ExtractionConfig, IdscanConfig, ScannerConfig};
pub use models::document::{DocumentType, Expiry, ExtractedRecord};
pub use ocr::{StaticRecognizer, TextRecognizer};
#[cfg(feature = "scanner")]
pub use ocr::DocumentScanner;
