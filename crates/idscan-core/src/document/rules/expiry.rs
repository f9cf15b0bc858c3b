//! Expiration date extraction.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{EXPIRY_DAY_MONTH_NAME, EXPIRY_DMY, EXPIRY_YMD};
use super::{FieldExtractor, FieldMatch};
use crate::document::classify::has_pan_signature;
use crate::document::normalize::NormalizedText;
use crate::models::document::Expiry;

/// Layouts tried, in order, on a captured date string.
pub const DATE_LAYOUTS: &[&str] = &["%d %b %Y", "%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Rule that produced an expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryRule {
    /// PAN documents do not expire.
    NoExpiry,
    /// Label followed by `DD MON YYYY`.
    DayMonthName,
    /// Label followed by `DD/MM/YYYY` (or `-`, `.` separators).
    DayMonthYear,
    /// Label followed by `YYYY-MM-DD` (or `/`, `.` separators).
    YearMonthDay,
}

impl ExpiryRule {
    const LABELLED: [ExpiryRule; 3] = [
        ExpiryRule::DayMonthName,
        ExpiryRule::DayMonthYear,
        ExpiryRule::YearMonthDay,
    ];

    fn pattern(&self) -> Option<&'static Regex> {
        match self {
            ExpiryRule::NoExpiry => None,
            ExpiryRule::DayMonthName => Some(&*EXPIRY_DAY_MONTH_NAME),
            ExpiryRule::DayMonthYear => Some(&*EXPIRY_DMY),
            ExpiryRule::YearMonthDay => Some(&*EXPIRY_YMD),
        }
    }
}

/// Expiration date extractor.
pub struct ExpiryExtractor;

impl ExpiryExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExpiryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExpiryExtractor {
    type Output = FieldMatch<Expiry, ExpiryRule>;

    fn extract(&self, text: &NormalizedText<'_>) -> Option<Self::Output> {
        if has_pan_signature(text.flat()) {
            return Some(FieldMatch::new(Expiry::Never, ExpiryRule::NoExpiry, ""));
        }

        for rule in ExpiryRule::LABELLED {
            let Some(caps) = rule.pattern().and_then(|re| re.captures(text.raw())) else {
                continue;
            };

            let captured = &caps[1];
            match parse_date(captured) {
                Some(date) => return Some(FieldMatch::new(Expiry::On(date), rule, &caps[0])),
                None => debug!("Expiry '{}' matched {:?} but no layout parses it", captured, rule),
            }
        }

        None
    }
}

/// Parse a date string against [`DATE_LAYOUTS`], first valid layout wins.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
}
