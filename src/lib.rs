//! Jalalify - Jalali (Persian) calendar adapters for forms, filters and storage
//!
//! This library adapts the Jalali calendar to an application's form parsing,
//! admin-style range filtering and date/time storage encodings. Calendar
//! arithmetic itself is delegated to `icu_calendar`; query conditions are
//! produced for SeaORM but never executed here.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`timezone`] - Fixed-offset timezone with no daylight-saving transitions
//! * [`convert`] - Compact date/time codecs and Jalali/Gregorian conversion
//! * [`fields`] - Form fields that parse Jalali-formatted input strings
//! * [`filters`] - From/to range filters producing SeaORM query conditions
//! * [`config`] - Application configuration management
//! * [`constants`] - Offsets, format strings and default values

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Compact date/time codecs and calendar conversion utilities
pub mod convert;

/// Common error types for parsing, validation and timezone handling
pub mod error;

/// Form fields accepting Jalali date and datetime strings
pub mod fields;

/// Date-range filters translating submitted bounds into query conditions
pub mod filters;

/// Fixed-offset timezone implementation
pub mod timezone;

// Re-export the types most callers need
pub use convert::JalaliFormat;
pub use error::JalalifyError;
pub use filters::{CalendarSystem, DateRangeFilter, Granularity};
pub use timezone::{FixedZone, TEHRAN};
