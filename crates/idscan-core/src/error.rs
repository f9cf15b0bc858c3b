//! Error types for the idscan-core library.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the idscan library.
///
/// Only [`ExtractionError`] is produced by the extraction engine itself. The
/// remaining variants belong to the collaborators around it (image
/// acquisition, OCR, configuration) and exist so callers can report every
/// failure through the same [`ErrorKind`] taxonomy.
#[derive(Error, Debug)]
pub enum IdscanError {
    /// The input was not a usable image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Document field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl IdscanError {
    /// Map this error onto the user-facing failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdscanError::InvalidImage(_) => ErrorKind::InvalidImage,
            IdscanError::Extraction(ExtractionError::NoDataFound) => ErrorKind::NoDataFound,
            IdscanError::Ocr(_) | IdscanError::Io(_) | IdscanError::Config(_) => {
                ErrorKind::ProcessingError
            }
        }
    }
}

/// Errors reported by an OCR backend.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine could not be started or is not installed.
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The engine produced output that is not valid text.
    #[error("invalid OCR output: {0}")]
    InvalidOutput(String),
}

/// Errors related to document field extraction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// Name, document number, or a required expiry date could not be found.
    #[error("no document data found")]
    NoDataFound,
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractionError::NoDataFound => ErrorKind::NoDataFound,
        }
    }
}

/// Closed set of failure reasons surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed or non-image upload, detected before OCR runs.
    InvalidImage,
    /// The OCR engine (or the plumbing around it) failed.
    ProcessingError,
    /// Extraction ran but the record was incomplete.
    NoDataFound,
}

impl ErrorKind {
    /// Stable wire code, e.g. `NO_DATA_FOUND`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidImage => "INVALID_IMAGE",
            ErrorKind::ProcessingError => "PROCESSING_ERROR",
            ErrorKind::NoDataFound => "NO_DATA_FOUND",
        }
    }

    /// Short heading for a retry prompt.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::InvalidImage => "Invalid Image",
            ErrorKind::ProcessingError => "Error Processing Document",
            ErrorKind::NoDataFound => "No Document Data Found",
        }
    }

    /// What the user should do next.
    pub fn hint(&self) -> &'static str {
        match self {
            ErrorKind::InvalidImage => "Please select a valid image file.",
            ErrorKind::ProcessingError => {
                "An error occurred while processing the document. Please try again."
            }
            ErrorKind::NoDataFound => {
                "Could not find required document information. Please ensure the document is clearly visible and try again."
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            IdscanError::InvalidImage("empty".into()).kind(),
            ErrorKind::InvalidImage
        );
        assert_eq!(
            IdscanError::from(OcrError::Recognition("boom".into())).kind(),
            ErrorKind::ProcessingError
        );
        assert_eq!(
            IdscanError::from(ExtractionError::NoDataFound).kind(),
            ErrorKind::NoDataFound
        );
        assert_eq!(
            IdscanError::Config("bad".into()).kind(),
            ErrorKind::ProcessingError
        );
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::NoDataFound.to_string(), "NO_DATA_FOUND");
        assert_eq!(
            serde_json::to_string(&ErrorKind::InvalidImage).unwrap(),
            "\"INVALID_IMAGE\""
        );
        assert_eq!(
            serde_json::from_str::<ErrorKind>("\"PROCESSING_ERROR\"").unwrap(),
            ErrorKind::ProcessingError
        );
    }
}
