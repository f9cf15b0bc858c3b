//! WASM bindings for identity document field extraction.
//!
//! The browser runs OCR itself and hands the recognized text to these
//! functions.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use idscan_core::DocumentExtractor as _;
use idscan_core::{classify, NormalizedText, RuleBasedExtractor};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract document data from OCR text.
///
/// Returns `{ name, documentNumber, expirationDate, documentType }` or `null`
/// when no complete record was found.
#[wasm_bindgen]
pub fn extract_document_data(text: &str) -> Result<JsValue, JsValue> {
    extract_with(&RuleBasedExtractor::new(), text)
}

/// Classify OCR text as `"PAN"`, `"DL"` or `"PASSPORT"`.
#[wasm_bindgen]
pub fn detect_document_type(text: &str) -> Option<String> {
    classify(&NormalizedText::new(text)).map(|t| t.code().to_string())
}

/// Full extraction report: partial fields, rule sources and warnings.
#[wasm_bindgen]
pub fn analyze_document(text: &str) -> Result<JsValue, JsValue> {
    to_js(&RuleBasedExtractor::new().analyze(text))
}

/// Document extractor class for browser use.
#[wasm_bindgen]
pub struct DocumentExtractor {
    extractor: RuleBasedExtractor,
}

#[wasm_bindgen]
impl DocumentExtractor {
    /// Create a new document extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: RuleBasedExtractor::new(),
        }
    }

    /// Allow or forbid names guessed from runs of capitalized words.
    #[wasm_bindgen]
    pub fn set_generic_name_fallback(&mut self, enabled: bool) {
        self.extractor = RuleBasedExtractor::new().with_generic_name_fallback(enabled);
    }

    /// Extract a record from text, or `null`.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        extract_with(&self.extractor, text)
    }

    /// Extraction report for text.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.analyze(text))
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_with(extractor: &RuleBasedExtractor, text: &str) -> Result<JsValue, JsValue> {
    match extractor.extract(text) {
        Ok(record) => to_js(&record),
        Err(_) => Ok(JsValue::NULL),
    }
}

/// Serialize with `null` for missing values, as JSON would.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAN: &str = "INCOME TAX DEPARTMENT\nPERMANENT ACCOUNT NUMBER\nJOHN SMITH\nAAAPL1234C";

    #[wasm_bindgen_test]
    fn test_extract_document_data() {
        let record = extract_document_data(PAN).unwrap();
        assert!(record.is_object());

        let empty = extract_document_data("").unwrap();
        assert!(empty.is_null());
    }

    #[wasm_bindgen_test]
    fn test_detect_document_type() {
        assert_eq!(detect_document_type(PAN).as_deref(), Some("PAN"));
        assert_eq!(detect_document_type("DRIVING LICENCE").as_deref(), Some("DL"));
        assert_eq!(detect_document_type("hello world"), None);
    }

    #[wasm_bindgen_test]
    fn test_strict_extractor() {
        let text = "MARIA GARCIA LOPEZ\n# 99887766\nEXP 2030-01-01";
        let mut extractor = DocumentExtractor::new();
        assert!(extractor.extract(text).unwrap().is_object());

        extractor.set_generic_name_fallback(false);
        assert!(extractor.extract(text).unwrap().is_null());
    }
}
