//! Identity document data models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of identity document recognized in the OCR text.
///
/// An unclassified document is represented as `Option::<DocumentType>::None`,
/// which serializes to JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Indian Permanent Account Number card (tax identification).
    #[serde(rename = "PAN")]
    Pan,
    /// Driving license.
    #[serde(rename = "DL")]
    DrivingLicense,
    /// Passport.
    #[serde(rename = "PASSPORT")]
    Passport,
}

impl DocumentType {
    /// Short code used on the wire (`PAN`, `DL`, `PASSPORT`).
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Pan => "PAN",
            DocumentType::DrivingLicense => "DL",
            DocumentType::Passport => "PASSPORT",
        }
    }

    /// Whether documents of this type carry an expiration date.
    pub fn has_expiry(&self) -> bool {
        !matches!(self, DocumentType::Pan)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAN" => Ok(DocumentType::Pan),
            "DL" => Ok(DocumentType::DrivingLicense),
            "PASSPORT" => Ok(DocumentType::Passport),
            other => Err(format!("unknown document type: '{other}'")),
        }
    }
}

/// Expiration of a document.
///
/// `Never` is the "no expiry" marker for document types that do not expire.
/// On the wire it is written as the far-future date [`Expiry::SENTINEL`] so
/// consumers that only understand dates keep working, but in Rust code it
/// can never be confused with a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Expiry {
    /// Expires at the end of this day.
    On(NaiveDate),
    /// The document carries no expiration.
    Never,
}

impl Expiry {
    /// Wire value of [`Expiry::Never`].
    pub const SENTINEL: &'static str = "9999-12-31";

    /// The real expiration date, if there is one.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Expiry::On(date) => Some(*date),
            Expiry::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Expiry::Never)
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Expiry::Never => f.write_str(Self::SENTINEL),
        }
    }
}

impl FromStr for Expiry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Self::SENTINEL {
            return Ok(Expiry::Never);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Expiry::On)
            .map_err(|e| format!("invalid expiration date '{s}': {e}"))
    }
}

impl From<Expiry> for String {
    fn from(expiry: Expiry) -> Self {
        expiry.to_string()
    }
}

impl TryFrom<String> for Expiry {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fields extracted from a single identity document.
///
/// Only built when the record is complete: `name` and `document_number` are
/// non-empty and `expiration_date` is either a parsed date or
/// [`Expiry::Never`] for document types without expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    /// Holder name in title case ("John Smith").
    pub name: String,

    /// Document identifier as printed on the document.
    pub document_number: String,

    /// Expiration date, or `Never` (written as `9999-12-31`).
    pub expiration_date: Expiry,

    /// Classified document type (`null` when unknown).
    pub document_type: Option<DocumentType>,
}

impl ExtractedRecord {
    /// Human-readable label of the document type.
    pub fn type_label(&self) -> &'static str {
        match self.document_type {
            Some(DocumentType::Pan) => "PAN Card",
            Some(DocumentType::DrivingLicense) => "Driver's License",
            Some(DocumentType::Passport) => "Passport",
            None => "Unknown Document",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_codes() {
        assert_eq!(DocumentType::Pan.to_string(), "PAN");
        assert_eq!(
            "dl".parse::<DocumentType>().unwrap(),
            DocumentType::DrivingLicense
        );
        assert!("visa".parse::<DocumentType>().is_err());
        assert!(!DocumentType::Pan.has_expiry());
        assert!(DocumentType::Passport.has_expiry());
    }

    #[test]
    fn test_expiry_sentinel() {
        assert_eq!(Expiry::Never.to_string(), "9999-12-31");
        assert_eq!("9999-12-31".parse::<Expiry>().unwrap(), Expiry::Never);
        assert_eq!(Expiry::Never.date(), None);

        let date = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
        assert_eq!(Expiry::On(date).to_string(), "2030-01-15");
        assert_eq!("2030-01-15".parse::<Expiry>().unwrap(), Expiry::On(date));
        assert!("15/01/2030".parse::<Expiry>().is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExtractedRecord {
            name: "John Smith".to_string(),
            document_number: "AAAPL1234C".to_string(),
            expiration_date: Expiry::Never,
            document_type: Some(DocumentType::Pan),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John Smith",
                "documentNumber": "AAAPL1234C",
                "expirationDate": "9999-12-31",
                "documentType": "PAN"
            })
        );

        let back: ExtractedRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_unknown_type_is_null() {
        let record = ExtractedRecord {
            name: "Jane Doe".to_string(),
            document_number: "X1234567".to_string(),
            expiration_date: Expiry::On(NaiveDate::from_ymd_opt(2031, 5, 20).unwrap()),
            document_type: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["documentType"].is_null());
        assert_eq!(record.type_label(), "Unknown Document");
    }
}
