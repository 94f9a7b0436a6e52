//! Compact date/time codecs and Jalali/Gregorian conversion utilities.
//!
//! Dates and times cross the storage boundary as compact decimal integers
//! (`YYYYMMDD` and `HHMMSS`). These encodings are display/storage artifacts
//! only; arithmetic always happens on calendar types. Every function here is
//! a one-shot pure transform over its arguments.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use icu_calendar::cal::Persian;
use icu_calendar::Date;

use crate::constants::{COMPACT_DATE_WIDTH, COMPACT_TIME_WIDTH, TIME_INPUT_FORMAT};
use crate::error::JalalifyError;
use crate::timezone::{FixedZone, TEHRAN};

/// Convert a Jalali calendar date to the equivalent Gregorian date.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate, JalalifyError> {
    let persian = Date::try_new_persian(year, month, day)?;
    let iso = persian.to_iso();
    NaiveDate::from_ymd_opt(
        iso.year().extended_year(),
        u32::from(iso.month().ordinal),
        u32::from(iso.day_of_month().0),
    )
    .ok_or_else(|| {
        JalalifyError::Validation(format!(
            "Jalali date {year:04}/{month:02}/{day:02} maps outside the supported Gregorian range"
        ))
    })
}

/// Convert a Gregorian date to Jalali (year, month, day) fields.
pub fn gregorian_to_jalali(date: NaiveDate) -> Result<(i32, u8, u8), JalalifyError> {
    let iso = Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)?;
    let persian = iso.to_calendar(Persian);
    Ok((persian.era_year().year, persian.month().ordinal, persian.day_of_month().0))
}

/// Parse a compact `YYYYMMDD` date from a string.
///
/// `-` separators are stripped and the first 8 remaining characters are
/// parsed as a decimal integer, so both `"1402-02-02"` and `"14020202"` are
/// accepted.
pub fn compact_date_from_str(value: &str) -> Result<u32, JalalifyError> {
    let stripped: String = value.chars().filter(|c| *c != '-').take(COMPACT_DATE_WIDTH).collect();
    if stripped.chars().count() < COMPACT_DATE_WIDTH {
        return Err(JalalifyError::Format(format!(
            "expected at least {COMPACT_DATE_WIDTH} date characters, got {value:?}"
        )));
    }
    stripped
        .parse()
        .map_err(|_| JalalifyError::Format(format!("compact date is not numeric: {value:?}")))
}

/// Parse a compact `HHMMSS` time from a string.
///
/// `:` separators are stripped and the first 6 remaining characters are
/// parsed as a decimal integer.
pub fn compact_time_from_str(value: &str) -> Result<u32, JalalifyError> {
    let stripped: String = value.chars().filter(|c| *c != ':').take(COMPACT_TIME_WIDTH).collect();
    if stripped.chars().count() < COMPACT_TIME_WIDTH {
        return Err(JalalifyError::Format(format!(
            "expected at least {COMPACT_TIME_WIDTH} time characters, got {value:?}"
        )));
    }
    stripped
        .parse()
        .map_err(|_| JalalifyError::Format(format!("compact time is not numeric: {value:?}")))
}

/// Render a compact time as a zero-padded 6-digit string.
///
/// `930` becomes `"000930"` and midnight (`0`) becomes `"000000"`.
pub fn compact_time_to_string(time: u32) -> String {
    format!("{time:06}")
}

/// Decode a compact Jalali `YYYYMMDD` integer to local midnight in Tehran.
pub fn compact_date_to_datetime(compact: u32) -> Result<DateTime<FixedZone>, JalalifyError> {
    let day = compact % 100;
    let rest = compact / 100;
    let month = rest % 100;
    let year = rest / 100;
    let date = jalali_to_gregorian(year as i32, month as u8, day as u8)?;
    Ok(TEHRAN.localize(date.and_time(NaiveTime::MIN)))
}

/// Decode compact `"YYYYMMDD"` / `"HHMMSS"` strings to a Tehran instant.
///
/// Fields are read as zero-padded fixed-width substrings, not split on
/// delimiters. Fails with a format error when either string is shorter than
/// its required width.
pub fn compact_strings_to_datetime(date: &str, time: &str) -> Result<DateTime<FixedZone>, JalalifyError> {
    let year = fixed_width_field(date, 0, 4)? as i32;
    let month = fixed_width_field(date, 4, 2)? as u8;
    let day = fixed_width_field(date, 6, 2)? as u8;
    let hour = fixed_width_field(time, 0, 2)?;
    let minute = fixed_width_field(time, 2, 2)?;
    let second = fixed_width_field(time, 4, 2)?;

    let gregorian = jalali_to_gregorian(year, month, day)?;
    let clock = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        JalalifyError::Validation(format!("time {hour:02}:{minute:02}:{second:02} is out of range"))
    })?;
    Ok(TEHRAN.localize(gregorian.and_time(clock)))
}

/// Encode an instant as compact Jalali (`"YYYYMMDD"`, `"HHMMSS"`) strings.
///
/// The year keeps its full 4 digits; each remaining field is zero-padded to
/// 2 digits.
pub fn jalali_compact_parts<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<(String, String), JalalifyError> {
    let local = instant.with_timezone(&TEHRAN);
    let (year, month, day) = gregorian_to_jalali(local.date_naive())?;
    let date = format!("{year:04}{month:02}{day:02}");
    let time = format!("{:02}{:02}{:02}", local.hour(), local.minute(), local.second());
    Ok((date, time))
}

/// Encode an instant as a compact Jalali `YYYYMMDD` integer, anchored to the
/// Tehran local date of the instant.
pub fn to_jalali_compact_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<u32, JalalifyError> {
    let (date, _) = jalali_compact_parts(instant)?;
    compact_date_from_str(&date)
}

/// Current instant in the Tehran fixed zone.
pub fn tehran_now() -> DateTime<FixedZone> {
    Utc::now().with_timezone(&TEHRAN)
}

/// Today's Jalali date in Tehran as a compact `YYYYMMDD` integer.
pub fn jalali_today_compact_date() -> Result<u32, JalalifyError> {
    to_jalali_compact_date(&tehran_now())
}

/// Current Tehran wall-clock time as a compact `HHMMSS` integer.
pub fn jalali_now_compact_time() -> u32 {
    let now = tehran_now();
    now.hour() * 10_000 + now.minute() * 100 + now.second()
}

/// Today's Jalali date in Tehran rendered as `YYYY/MM/DD`.
pub fn jalali_now_date_string() -> Result<String, JalalifyError> {
    let now = tehran_now();
    let (year, month, day) = gregorian_to_jalali(now.date_naive())?;
    Ok(format!("{year:04}/{month:02}/{day:02}"))
}

/// Current Tehran wall-clock time rendered as `HH:MM:SS`.
pub fn jalali_now_time_string() -> String {
    tehran_now().format(TIME_INPUT_FORMAT).to_string()
}

/// Render an instant in Tehran with millisecond accuracy, using `:` before
/// the fractional part (`2023/05/03 14:15:36:466`).
pub fn tehran_timestamp_millis<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&TEHRAN).format("%Y/%m/%d %H:%M:%S:%3f").to_string()
}

/// Jalali rendering for timezone-aware instants.
///
/// The seam model layers use to expose a datetime column in the Jalali
/// calendar without owning the conversion themselves.
pub trait JalaliFormat {
    /// Render the instant as `YYYY/MM/DD HH:MM:SS` in the Jalali calendar,
    /// Tehran zone.
    fn jalali_datetime_string(&self) -> Result<String, JalalifyError>;
}

impl<Tz: TimeZone> JalaliFormat for DateTime<Tz> {
    fn jalali_datetime_string(&self) -> Result<String, JalalifyError> {
        let local = self.with_timezone(&TEHRAN);
        let (year, month, day) = gregorian_to_jalali(local.date_naive())?;
        Ok(format!(
            "{year:04}/{month:02}/{day:02} {:02}:{:02}:{:02}",
            local.hour(),
            local.minute(),
            local.second()
        ))
    }
}

/// Parse a `Y/M/D` string into numeric Jalali (or Gregorian) components.
pub(crate) fn parse_ymd(value: &str) -> Result<(i32, u8, u8), JalalifyError> {
    let mut parts = value.split('/');
    let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JalalifyError::Format(format!("expected Y/M/D, got {value:?}")));
    };
    let year: i32 = year
        .parse()
        .map_err(|_| JalalifyError::Format(format!("non-numeric year {year:?} in {value:?}")))?;
    let month: u8 = month
        .parse()
        .map_err(|_| JalalifyError::Format(format!("bad month {month:?} in {value:?}")))?;
    let day: u8 = day
        .parse()
        .map_err(|_| JalalifyError::Format(format!("bad day {day:?} in {value:?}")))?;
    Ok((year, month, day))
}

/// Parse an `H:M:S` string into a clock time.
pub(crate) fn parse_clock(value: &str) -> Result<NaiveTime, JalalifyError> {
    let mut parts = value.split(':');
    let (Some(hour), Some(minute), Some(second), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JalalifyError::Format(format!("expected H:M:S, got {value:?}")));
    };
    let hour = parse_component(hour, value)?;
    let minute = parse_component(minute, value)?;
    let second = parse_component(second, value)?;
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| JalalifyError::Validation(format!("time {value:?} is out of range")))
}

fn parse_component(component: &str, context: &str) -> Result<u32, JalalifyError> {
    component
        .parse()
        .map_err(|_| JalalifyError::Format(format!("non-numeric component {component:?} in {context:?}")))
}

fn fixed_width_field(value: &str, start: usize, width: usize) -> Result<u32, JalalifyError> {
    let field: String = value.chars().skip(start).take(width).collect();
    if field.chars().count() < width {
        return Err(JalalifyError::Format(format!(
            "expected {width} characters at position {start} of {value:?}"
        )));
    }
    field
        .parse()
        .map_err(|_| JalalifyError::Format(format!("non-numeric field {field:?} in {value:?}")))
}
