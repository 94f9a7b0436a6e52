//! Fixed-offset timezone implementation.
//!
//! Region-table timezones (IANA lookups) apply historical daylight-saving
//! rules, so "Tehran time" can silently shift depending on which era an
//! instant falls in. [`FixedZone`] carries a single constant offset instead:
//! every conversion uses the same offset for every instant, which the codec
//! and filter layers rely on for predictable results.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

use crate::constants::{TEHRAN_OFFSET_SECONDS, TEHRAN_ZONE_NAME};
use crate::error::JalalifyError;

/// A timezone with a constant UTC offset and no daylight-saving transitions.
///
/// Two instances compare equal when their offsets are equal; the display
/// name is cosmetic and ignored by `PartialEq`/`Hash`. The canonical string
/// form is the signed `+HH:MM` offset.
#[derive(Clone, Copy, Debug)]
pub struct FixedZone {
    offset: FixedOffset,
    name: Option<&'static str>,
}

/// The Tehran timezone at a fixed +03:30 offset.
///
/// Process-wide value: constructed once at compile time, never mutated.
/// Prefer passing it (or a [`FixedZone`] from configuration) explicitly over
/// reaching for ambient state.
pub const TEHRAN: FixedZone = FixedZone {
    offset: match FixedOffset::east_opt(TEHRAN_OFFSET_SECONDS) {
        Some(offset) => offset,
        None => panic!("Tehran offset is within the valid range"),
    },
    name: Some(TEHRAN_ZONE_NAME),
};

impl FixedZone {
    /// Create a zone from an already-validated chrono offset.
    pub const fn new(offset: FixedOffset, name: Option<&'static str>) -> Self {
        Self { offset, name }
    }

    /// Create a zone east of UTC from hour and minute components.
    ///
    /// Both components carry the sign of the offset, so `east(-3, -30)` is
    /// `-03:30`. Fails with `InvalidArgument` when the minutes component is
    /// not below an hour, the components disagree on sign, or the total
    /// offset leaves the ±23:59 range.
    pub fn east(hours: i32, minutes: i32) -> Result<Self, JalalifyError> {
        if minutes.abs() >= 60 {
            return Err(JalalifyError::InvalidArgument(format!(
                "offset minutes must be below an hour, got {minutes}"
            )));
        }
        if hours.signum() * minutes.signum() < 0 {
            return Err(JalalifyError::InvalidArgument(format!(
                "offset components must share a sign, got {hours}:{minutes}"
            )));
        }
        let seconds = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60))
            .unwrap_or(i32::MAX);
        let offset = FixedOffset::east_opt(seconds).ok_or_else(|| {
            JalalifyError::InvalidArgument(format!("UTC offset {hours:+}:{:02} is out of range", minutes.abs()))
        })?;
        Ok(Self { offset, name: None })
    }

    /// Attach a display name, used by [`FixedZone::time_zone_name`] only.
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// The constant UTC offset, identical for every instant.
    pub fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    /// The daylight-saving adjustment, always zero.
    pub fn dst_adjustment(&self) -> Duration {
        Duration::zero()
    }

    /// The display name when one is set, else the canonical `+HH:MM` form.
    pub fn time_zone_name(&self) -> String {
        match self.name {
            Some(name) => name.to_string(),
            None => self.to_string(),
        }
    }

    /// Interpret a wall-clock reading as local time in this zone.
    ///
    /// The offset is structurally constant, so unlike a table-based zone no
    /// per-instant offset lookup happens and the mapping is always
    /// unambiguous.
    pub fn localize(&self, local: NaiveDateTime) -> DateTime<FixedZone> {
        DateTime::from_naive_utc_and_offset(local - self.offset, *self)
    }
}

impl PartialEq for FixedZone {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for FixedZone {}

impl Hash for FixedZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.local_minus_utc().hash(state);
    }
}

impl fmt::Display for FixedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.offset.local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let abs = seconds.abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
    }
}

impl Offset for FixedZone {
    fn fix(&self) -> FixedOffset {
        self.offset
    }
}

impl TimeZone for FixedZone {
    // The offset carries no per-instant state, so the zone is its own offset.
    type Offset = FixedZone;

    fn from_offset(offset: &Self::Offset) -> Self {
        *offset
    }

    fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<Self::Offset> {
        LocalResult::Single(*self)
    }

    fn offset_from_local_datetime(&self, _local: &NaiveDateTime) -> LocalResult<Self::Offset> {
        LocalResult::Single(*self)
    }

    fn offset_from_utc_date(&self, _utc: &NaiveDate) -> Self::Offset {
        *self
    }

    fn offset_from_utc_datetime(&self, _utc: &NaiveDateTime) -> Self::Offset {
        *self
    }
}
