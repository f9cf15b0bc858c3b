//! Document type classification.

use tracing::debug;

use super::normalize::NormalizedText;
use super::rules::patterns::{DRIVING_LICENSE_PHRASE, PAN_SHAPE, PASSPORT_PHRASE};
use crate::models::document::DocumentType;

type Signature = fn(&str) -> bool;

/// Signatures in priority order; the first one present decides the type.
///
/// PAN comes first: its identifier shape is a strong signal and wins even
/// when passport or license keywords also appear.
const SIGNATURES: &[(DocumentType, Signature)] = &[
    (DocumentType::Pan, has_pan_signature),
    (DocumentType::DrivingLicense, has_driving_license_signature),
    (DocumentType::Passport, has_passport_signature),
];

/// Classify normalized OCR text. `None` means the type is unknown.
pub fn classify(text: &NormalizedText<'_>) -> Option<DocumentType> {
    let doc_type = SIGNATURES
        .iter()
        .find(|(_, matches)| matches(text.flat()))
        .map(|(doc_type, _)| *doc_type);

    debug!("Classified document as {:?}", doc_type);
    doc_type
}

/// PAN card header phrases or a PAN-shaped identifier (`AAAPL1234C`).
///
/// Expects normalized (uppercase) text.
pub fn has_pan_signature(text: &str) -> bool {
    text.contains("INCOME TAX DEPARTMENT")
        || text.contains("PERMANENT ACCOUNT NUMBER")
        || PAN_SHAPE.is_match(text)
}

fn has_driving_license_signature(text: &str) -> bool {
    DRIVING_LICENSE_PHRASE.is_match(text)
}

fn has_passport_signature(text: &str) -> bool {
    PASSPORT_PHRASE.is_match(text)
}
