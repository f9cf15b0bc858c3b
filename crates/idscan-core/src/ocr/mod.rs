//! OCR collaborator seam: the recognizer trait and the image scanning pipeline.

mod recognizer;
#[cfg(feature = "scanner")]
mod scanner;

pub use recognizer::{StaticRecognizer, TextRecognizer};
#[cfg(feature = "scanner")]
pub use scanner::DocumentScanner;
