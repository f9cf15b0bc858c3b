//! End-to-end extraction scenarios through the public API.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use idscan_core::{
    classify, extract_document, DocumentExtractor, DocumentType, Expiry, ExtractedRecord,
    ExtractionError, NormalizedText, RuleBasedExtractor,
};

const PAN_CARD: &str = "INCOME TAX DEPARTMENT\nPERMANENT ACCOUNT NUMBER\nJOHN SMITH\nAAAPL1234C";
const DRIVING_LICENSE: &str =
    "DRIVING LICENSE\nNAME: JANE DOE\nDL NO: AB1234567890\nEXP: 15 JAN 2030";
const PASSPORT_BAD_DATE: &str =
    "PASSPORT\nSURNAME DOE GIVEN NAME JANE\nZ1234567\nVALID UNTIL GARBAGE";
const PROSE: &str = "The weather today is sunny with a light breeze from the west.";
const SHORT_NAME_PARTS: &str =
    "DRIVING LICENSE\nNAME: NG WEI\nDL NO: AB1234567890\nEXP: 15 JAN 2030";
const PAN_WITH_NOISE: &str =
    "INCOME TAX DEPARTMENT\nPERMANENT ACCOUNT NUMBER\nJOHN SMITH\nAAAPL1234C5";
const LONG_LICENSE_NUMBER: &str =
    "DRIVING LICENSE\nNAME: JANE A DOE\nDL NO: AB12345678901234567\nVALID UNTIL 2032-03-01";

const SAMPLES: &[&str] = &[
    PAN_CARD,
    DRIVING_LICENSE,
    PASSPORT_BAD_DATE,
    PROSE,
    "",
    "PASSPORT NO: Z1234567\nGIVEN NAME: JANE DOE\nDATE OF EXPIRY: 2031-05-20",
    "Driver's License\nName: patrick o'brien\nLicence No. K9876543\nValid Until 20/05/2031",
    SHORT_NAME_PARTS,
    PAN_WITH_NOISE,
    LONG_LICENSE_NUMBER,
];

#[test]
fn pan_card() {
    assert_eq!(
        extract_document(PAN_CARD),
        Ok(ExtractedRecord {
            name: "John Smith".to_string(),
            document_number: "AAAPL1234C".to_string(),
            expiration_date: Expiry::Never,
            document_type: Some(DocumentType::Pan),
        })
    );

    let json = serde_json::to_value(extract_document(PAN_CARD).unwrap()).unwrap();
    assert_eq!(json["expirationDate"], "9999-12-31");
    assert_eq!(json["documentType"], "PAN");
}

#[test]
fn driving_license() {
    assert_eq!(
        extract_document(DRIVING_LICENSE),
        Ok(ExtractedRecord {
            name: "Jane Doe".to_string(),
            document_number: "AB1234567890".to_string(),
            expiration_date: Expiry::On(NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()),
            document_type: Some(DocumentType::DrivingLicense),
        })
    );
    assert_eq!(
        extract_document(DRIVING_LICENSE).unwrap().expiration_date.to_string(),
        "2030-01-15"
    );
}

#[test]
fn passport_with_unparseable_date() {
    let report = RuleBasedExtractor::new().analyze(PASSPORT_BAD_DATE);
    assert_eq!(report.document_type, Some(DocumentType::Passport));
    assert_eq!(report.expiration_date, None);

    assert_eq!(
        extract_document(PASSPORT_BAD_DATE),
        Err(ExtractionError::NoDataFound)
    );
}

#[test]
fn passport_complete() {
    let record = extract_document(SAMPLES[5]).unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.document_number, "Z1234567");
    assert_eq!(record.expiration_date.to_string(), "2031-05-20");
    assert_eq!(record.document_type, Some(DocumentType::Passport));
}

#[test]
fn driving_license_with_mixed_case() {
    let record = extract_document(SAMPLES[6]).unwrap();
    assert_eq!(record.name, "Patrick O'brien");
    assert_eq!(record.document_number, "K9876543");
    assert_eq!(record.expiration_date.to_string(), "2031-05-20");
    assert_eq!(record.document_type, Some(DocumentType::DrivingLicense));
}

#[test]
fn driving_license_with_short_name_parts() {
    let record = extract_document(SHORT_NAME_PARTS).unwrap();
    assert_eq!(record.name, "Ng Wei");
    assert_eq!(record.document_number, "AB1234567890");
    assert_eq!(record.expiration_date.to_string(), "2030-01-15");
    assert_eq!(record.document_type, Some(DocumentType::DrivingLicense));
}

#[test]
fn pan_number_followed_by_noise() {
    assert_eq!(
        extract_document(PAN_WITH_NOISE),
        Ok(ExtractedRecord {
            name: "John Smith".to_string(),
            document_number: "AAAPL1234C".to_string(),
            expiration_date: Expiry::Never,
            document_type: Some(DocumentType::Pan),
        })
    );
}

#[test]
fn driving_license_number_is_truncated() {
    let record = extract_document(LONG_LICENSE_NUMBER).unwrap();
    assert_eq!(record.name, "Jane A Doe");
    assert_eq!(record.document_number, "AB12345678901234");
    assert_eq!(record.expiration_date.to_string(), "2032-03-01");
    assert_eq!(record.document_type, Some(DocumentType::DrivingLicense));
}

#[test]
fn every_document_sample_extracts() {
    let extracted = SAMPLES
        .iter()
        .filter(|text| extract_document(text).is_ok())
        .count();
    assert_eq!(extracted, 7);
}

#[test]
fn prose_has_no_document() {
    assert_eq!(classify(&NormalizedText::new(PROSE)), None);
    assert_eq!(extract_document(PROSE), Err(ExtractionError::NoDataFound));
}

#[test]
fn empty_input() {
    assert_eq!(extract_document(""), Err(ExtractionError::NoDataFound));
    assert_eq!(extract_document("   \n\t"), Err(ExtractionError::NoDataFound));
}

#[test]
fn extraction_is_pure() {
    let extractor = RuleBasedExtractor::new();
    for text in SAMPLES {
        assert_eq!(extractor.extract(text), extractor.extract(text), "{text:?}");
    }
}

#[test]
fn missing_name_or_number_never_succeeds() {
    let extractor = RuleBasedExtractor::new();
    for text in SAMPLES {
        let report = extractor.analyze(text);
        if report.name.is_none() || report.document_number.is_none() {
            assert_eq!(extractor.extract(text), Err(ExtractionError::NoDataFound));
        }
    }
}

#[test]
fn pan_records_default_to_no_expiry() {
    for text in SAMPLES {
        if let Ok(record) = extract_document(text) {
            if record.document_type == Some(DocumentType::Pan) {
                assert_eq!(record.expiration_date, Expiry::Never);
            }
        }
    }
}

#[test]
fn names_are_title_case() {
    for text in SAMPLES {
        let Ok(record) = extract_document(text) else {
            continue;
        };
        for word in record.name.split(' ') {
            let mut chars = word.chars();
            let first = chars.next().unwrap();
            assert!(first.is_uppercase(), "{}", record.name);
            assert!(chars.all(|c| !c.is_uppercase()), "{}", record.name);
        }
    }
}
