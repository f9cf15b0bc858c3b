//! Configuration structures for the scanning pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{IdscanError, Result};

/// Main configuration for the idscan pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Image intake and OCR configuration.
    pub scanner: ScannerConfig,
}

/// Document field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Accept any run of 2-4 capitalized words as a name when no labelled
    /// name is found. Prone to false positives on unrelated text.
    pub generic_name_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            generic_name_fallback: true,
        }
    }
}

/// Image intake and external OCR configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Reject images larger than this many bytes.
    pub max_image_bytes: usize,

    /// External OCR command. `{input}` is replaced with the image path; the
    /// recognized text is read from stdout.
    pub ocr_command: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 10 * 1024 * 1024,
            ocr_command: vec![
                "tesseract".to_string(),
                "{input}".to_string(),
                "stdout".to_string(),
            ],
        }
    }
}

impl IdscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| IdscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| IdscanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
