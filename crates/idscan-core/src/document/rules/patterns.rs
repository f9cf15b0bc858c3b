//! Common regex patterns for identity document extraction.
//!
//! Classification and name patterns run against normalized (uppercase,
//! whitespace-collapsed) text and are case-sensitive. Number and date patterns
//! run against the raw OCR text and are case-insensitive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document signatures
    pub static ref PAN_SHAPE: Regex = Regex::new(
        r"[A-Z]{5}[0-9]{4}[A-Z]"
    ).unwrap();

    pub static ref DRIVING_LICENSE_PHRASE: Regex = Regex::new(
        r"DRIVING LICEN[SC]E|DRIVER'?S LICEN[SC]E|DL NO"
    ).unwrap();

    pub static ref PASSPORT_PHRASE: Regex = Regex::new(
        r"PASS ?PORT|REPUBLIC OF INDIA.*PASSPORT"
    ).unwrap();

    // Names
    pub static ref NAME_LINE: Regex = Regex::new(
        r"^[A-Z][A-Z\s.'\-]{2,}$"
    ).unwrap();

    pub static ref LABELLED_NAME: Regex = Regex::new(
        r"\b(?:GIVEN NAMES?|SURNAME|NOM|PRENOM)[\s:]+([A-Z][A-Z\s.'\-]{2,}(?:\s+[A-Z][A-Z\s.'\-]{2,}){0,3})"
    ).unwrap();

    pub static ref NAME_FIELD: Regex = Regex::new(
        r"(?:\bNAME|^)[\s:]+([A-Z][A-Z\s.'\-]{2,}(?:\s+[A-Z][A-Z\s.'\-]{2,}){0,3})"
    ).unwrap();

    pub static ref GENERIC_NAME: Regex = Regex::new(
        r"\b([A-Z][A-Z\s.'\-]{2,}(?:\s+[A-Z][A-Z\s.'\-]{2,}){1,3})\b"
    ).unwrap();

    pub static ref FORMATTED_NAME: Regex = Regex::new(
        r"^[A-Z][a-z]"
    ).unwrap();

    // Document numbers
    pub static ref PAN_NUMBER: Regex = Regex::new(
        r"(?i)(?:\b(?:PERMANENT\s+ACCOUNT\s+NUMBER|PAN))?\s*([A-Z]{5}[0-9]{4}[A-Z])"
    ).unwrap();

    pub static ref DRIVING_LICENSE_NUMBER: Regex = Regex::new(
        r"(?i)(?:\b(?:DL[.\s]?NO|LICEN[CS]E\s?NO)\.?|#)[\s:]*([A-Z0-9]{6,16})"
    ).unwrap();

    pub static ref PASSPORT_NUMBER: Regex = Regex::new(
        r"(?i)(?:PASSPORT\s+NO\.?|^)[\s:]*\b([A-Z][0-9]{7}|[A-Z0-9]{9})\b"
    ).unwrap();

    // Expiration dates
    pub static ref EXPIRY_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(?:DATE\s+OF\s+EXPIRY|EXP(?:IRY|IRES)?|VALID(?:\s+UNTIL)?)\.?[\s:]*(\d{2}\s+(?:JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\s+\d{4})"
    ).unwrap();

    pub static ref EXPIRY_DMY: Regex = Regex::new(
        r"(?i)\b(?:DATE\s+OF\s+EXPIRY|EXP(?:IRY|IRES)?|VALID(?:\s+UNTIL)?)\.?[\s:]*(\d{2}[-/.]\d{2}[-/.]\d{4})"
    ).unwrap();

    pub static ref EXPIRY_YMD: Regex = Regex::new(
        r"(?i)\b(?:DATE\s+OF\s+EXPIRY|EXP(?:IRY|IRES)?|VALID(?:\s+UNTIL)?)\.?[\s:]*(\d{4}[-/.]\d{2}[-/.]\d{2})"
    ).unwrap();
}
