//! Document number extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{DRIVING_LICENSE_NUMBER, PAN_NUMBER, PASSPORT_NUMBER};
use super::{FieldExtractor, FieldMatch};
use crate::document::normalize::NormalizedText;

/// Identifier shape that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberShape {
    /// Five letters, four digits, one letter (`AAAPL1234C`).
    Pan,
    /// 6-16 alphanumerics after a `DL NO`, `LICENCE NO` or `#` label.
    DrivingLicense,
    /// One letter and seven digits, or nine alphanumerics.
    Passport,
}

impl NumberShape {
    /// Shapes in the order they are tried.
    pub const ALL: [NumberShape; 3] = [
        NumberShape::Pan,
        NumberShape::DrivingLicense,
        NumberShape::Passport,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            NumberShape::Pan => &*PAN_NUMBER,
            NumberShape::DrivingLicense => &*DRIVING_LICENSE_NUMBER,
            NumberShape::Passport => &*PASSPORT_NUMBER,
        }
    }
}

/// Document number extractor. The first shape that matches the raw text wins.
pub struct DocumentNumberExtractor;

impl DocumentNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocumentNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DocumentNumberExtractor {
    type Output = FieldMatch<String, NumberShape>;

    fn extract(&self, text: &NormalizedText<'_>) -> Option<Self::Output> {
        NumberShape::ALL.iter().find_map(|shape| {
            let caps = shape.pattern().captures(text.raw())?;
            let number = caps.get(1)?.as_str().trim();
            if number.is_empty() {
                return None;
            }
            Some(FieldMatch::new(number.to_string(), *shape, &caps[0]))
        })
    }
}
