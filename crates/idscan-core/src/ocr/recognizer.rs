//! OCR backend abstraction.

use crate::error::OcrError;

/// An OCR engine: turns encoded image bytes (PNG, JPEG, ...) into text.
///
/// The extraction engine never calls this itself; `DocumentScanner`
/// does, after the image has been validated.
pub trait TextRecognizer: Send + Sync {
    /// Recognize all text in the image.
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;

    /// Engine name for logs.
    fn name(&self) -> &str;
}

/// Returns preset text for any image. Useful for tests and for feeding text
/// from an OCR engine that already ran elsewhere.
pub struct StaticRecognizer {
    text: String,
}

impl StaticRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextRecognizer for StaticRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

impl<R: TextRecognizer + ?Sized> TextRecognizer for Box<R> {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        (**self).recognize(image_bytes)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
