//! Data models and configuration.

pub mod config;
pub mod document;

pub use config::{ExtractionConfig, IdscanConfig, ScannerConfig};
pub use document::{DocumentType, Expiry, ExtractedRecord};
