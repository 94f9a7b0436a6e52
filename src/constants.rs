//! Constants used throughout the library
//!
//! This module centralizes the Tehran offset, wire formats and user-facing
//! messages so the timezone, field and filter layers stay consistent.

// Tehran offset components (+03:30, no daylight saving since 2022)
pub const TEHRAN_OFFSET_HOURS: i32 = 3;
pub const TEHRAN_OFFSET_MINUTES: i32 = 30;
pub const TEHRAN_OFFSET_SECONDS: i32 = TEHRAN_OFFSET_HOURS * 3600 + TEHRAN_OFFSET_MINUTES * 60;
pub const TEHRAN_ZONE_NAME: &str = "Asia/Tehran";

// Wire formats accepted by fields and filters, shared by both calendars
pub const DATE_INPUT_FORMAT: &str = "%Y/%m/%d";
pub const TIME_INPUT_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_INPUT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// Compact encodings: YYYYMMDD and HHMMSS
pub const COMPACT_DATE_WIDTH: usize = 8;
pub const COMPACT_TIME_WIDTH: usize = 6;

// Query parameter naming for range filters
pub const RANGE_GTE_SUFFIX: &str = "__range__gte";
pub const RANGE_LTE_SUFFIX: &str = "__range__lte";

// Validation Error Messages
pub const ERROR_INVALID_DATE: &str = "Enter a valid date of the format YYYY/mm/dd";
pub const ERROR_INVALID_DATETIME: &str = "Enter a valid datetime of the format YYYY/mm/dd HH:MM:SS";

// Widget placeholders
pub const PLACEHOLDER_FROM_DATE: &str = "From date";
pub const PLACEHOLDER_TO_DATE: &str = "To date";
