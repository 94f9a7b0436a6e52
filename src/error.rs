//! Common error types for parsing, validation and timezone handling.
//!
//! All errors are reported synchronously to the immediate caller; nothing is
//! retried internally. The field and filter layers surface [`Format`] and
//! [`Validation`] as user input feedback rather than raising past the
//! request boundary.
//!
//! [`Format`]: JalalifyError::Format
//! [`Validation`]: JalalifyError::Validation

/// Errors produced by the conversion, field and filter layers.
#[derive(Debug, thiserror::Error)]
pub enum JalalifyError {
    /// The input string does not match the expected fixed-width or
    /// delimited shape.
    #[error("Invalid format: {0}")]
    Format(String),

    /// The calendar rejected out-of-range fields (month 13, hour 99, ...).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A timezone was constructed or used with an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<icu_calendar::RangeError> for JalalifyError {
    fn from(err: icu_calendar::RangeError) -> Self {
        Self::Validation(err.to_string())
    }
}
