//! Image-to-record pipeline around the extraction engine.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::recognizer::TextRecognizer;
use crate::document::{DocumentExtractor, RuleBasedExtractor};
use crate::error::{IdscanError, Result};
use crate::models::config::IdscanConfig;
use crate::models::document::ExtractedRecord;

/// Validates an image, runs OCR on it and extracts the document record.
///
/// Failures map onto the three user-facing kinds: a bad upload is
/// `InvalidImage`, an OCR failure is `ProcessingError`, and an incomplete
/// record is `NoDataFound`.
pub struct DocumentScanner<R: TextRecognizer> {
    recognizer: R,
    extractor: RuleBasedExtractor,
    max_image_bytes: usize,
}

impl<R: TextRecognizer> DocumentScanner<R> {
    /// Create a scanner with default settings.
    pub fn new(recognizer: R) -> Self {
        Self::with_config(recognizer, &IdscanConfig::default())
    }

    /// Create a scanner from configuration.
    pub fn with_config(recognizer: R, config: &IdscanConfig) -> Self {
        Self {
            recognizer,
            extractor: RuleBasedExtractor::with_config(&config.extraction),
            max_image_bytes: config.scanner.max_image_bytes,
        }
    }

    /// Read an image file and scan it.
    pub fn scan_file(&self, path: &Path) -> Result<ExtractedRecord> {
        let bytes = std::fs::read(path)
            .map_err(|e| IdscanError::InvalidImage(format!("{}: {}", path.display(), e)))?;
        self.scan(&bytes)
    }

    /// Scan encoded image bytes.
    pub fn scan(&self, image_bytes: &[u8]) -> Result<ExtractedRecord> {
        let start = Instant::now();

        self.validate(image_bytes)?;

        let text = self.recognizer.recognize(image_bytes)?;
        debug!(
            "{} recognized {} characters in {:?}",
            self.recognizer.name(),
            text.len(),
            start.elapsed()
        );

        let record = self.extractor.extract(&text).inspect_err(|_| {
            warn!("OCR text did not contain a complete document record");
        })?;

        info!(
            "Scanned {} in {:?}",
            record.type_label(),
            start.elapsed()
        );
        Ok(record)
    }

    fn validate(&self, image_bytes: &[u8]) -> Result<()> {
        if image_bytes.is_empty() {
            return Err(IdscanError::InvalidImage("image is empty".to_string()));
        }

        if image_bytes.len() > self.max_image_bytes {
            return Err(IdscanError::InvalidImage(format!(
                "image is {} bytes, limit is {}",
                image_bytes.len(),
                self.max_image_bytes
            )));
        }

        let image = image::load_from_memory(image_bytes)
            .map_err(|e| IdscanError::InvalidImage(e.to_string()))?;
        debug!("Accepted {}x{} image", image.width(), image.height());

        Ok(())
    }
}
