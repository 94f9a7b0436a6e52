//! Form fields accepting Jalali date and datetime strings.
//!
//! Fields follow form semantics: blank input cleans to `None`, malformed or
//! out-of-range input fails with the user-facing "invalid" message, and a
//! successful clean yields a calendar-agnostic value (a Gregorian date or a
//! timezone-aware instant).

use chrono::{DateTime, NaiveDate};

use crate::constants::{
    ERROR_INVALID_DATE, ERROR_INVALID_DATETIME, PLACEHOLDER_FROM_DATE, PLACEHOLDER_TO_DATE, RANGE_GTE_SUFFIX,
    RANGE_LTE_SUFFIX,
};
use crate::convert::{jalali_to_gregorian, parse_clock, parse_ymd};
use crate::error::JalalifyError;
use crate::timezone::{FixedZone, TEHRAN};

/// Which of the two supported input shapes a field accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `YYYY/MM/DD`
    Date,
    /// `YYYY/MM/DD HH:MM:SS`
    DateTime,
}

/// Form field parsing a Jalali `YYYY/MM/DD` string into a Gregorian date.
pub struct JalaliDateField;

impl JalaliDateField {
    /// Clean raw form input into a Gregorian date.
    ///
    /// Blank input is not an error and cleans to `None`.
    pub fn clean(value: &str) -> Result<Option<NaiveDate>, JalalifyError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (year, month, day) =
            parse_ymd(trimmed).map_err(|_| JalalifyError::Validation(ERROR_INVALID_DATE.to_string()))?;
        jalali_to_gregorian(year, month, day)
            .map(Some)
            .map_err(|_| JalalifyError::Validation(ERROR_INVALID_DATE.to_string()))
    }
}

/// Form field parsing a Jalali `YYYY/MM/DD HH:MM:SS` string into a
/// timezone-aware instant in the Tehran fixed zone.
pub struct JalaliDateTimeField;

impl JalaliDateTimeField {
    /// Clean raw form input into a timezone-aware instant.
    ///
    /// Blank input is not an error and cleans to `None`.
    pub fn clean(value: &str) -> Result<Option<DateTime<FixedZone>>, JalalifyError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (date_part, time_part) = trimmed
            .split_once(' ')
            .ok_or_else(|| JalalifyError::Validation(ERROR_INVALID_DATETIME.to_string()))?;
        Self::clean_parts(date_part, time_part).map(Some)
    }

    /// Clean the two halves of a split date/time widget.
    pub fn clean_parts(date_part: &str, time_part: &str) -> Result<DateTime<FixedZone>, JalalifyError> {
        let invalid = || JalalifyError::Validation(ERROR_INVALID_DATETIME.to_string());
        let (year, month, day) = parse_ymd(date_part.trim()).map_err(|_| invalid())?;
        let clock = parse_clock(time_part.trim()).map_err(|_| invalid())?;
        let gregorian = jalali_to_gregorian(year, month, day).map_err(|_| invalid())?;
        Ok(TEHRAN.localize(gregorian.and_time(clock)))
    }
}

/// One half of a from/to widget pair.
#[derive(Clone, Debug)]
pub struct BoundField {
    /// Query parameter name the widget submits under.
    pub name: String,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

/// Configuration describing the two bound fields of a range widget.
///
/// Replaces runtime form-class synthesis: callers get a plain value
/// describing the pair and wire it to whatever widget layer they use.
#[derive(Clone, Debug)]
pub struct RangeFieldPair {
    pub gte: BoundField,
    pub lte: BoundField,
}

/// Build the from/to field pair for a filtered model field.
pub fn range_field_pair(field_path: &str, kind: FieldKind) -> RangeFieldPair {
    RangeFieldPair {
        gte: BoundField {
            name: format!("{field_path}{RANGE_GTE_SUFFIX}"),
            kind,
            placeholder: PLACEHOLDER_FROM_DATE,
        },
        lte: BoundField {
            name: format!("{field_path}{RANGE_LTE_SUFFIX}"),
            kind,
            placeholder: PLACEHOLDER_TO_DATE,
        },
    }
}
