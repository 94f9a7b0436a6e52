//! Date-range filters translating submitted bounds into query conditions.
//!
//! A single [`DateRangeFilter`] covers the four date/datetime × Gregorian/
//! Jalali combinations through two orthogonal enums; the conversion strategy
//! is picked by matching on the pair. The filter reads its two query
//! parameters, widens date-only bounds to whole local days and produces an
//! inclusive SeaORM condition. It never executes queries.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, Condition};

use crate::config::Config;
use crate::constants::{DATE_INPUT_FORMAT, RANGE_GTE_SUFFIX, RANGE_LTE_SUFFIX};
use crate::convert::{jalali_to_gregorian, parse_clock, parse_ymd};
use crate::error::JalalifyError;
use crate::timezone::FixedZone;

/// Whether a filter reads whole days or exact instants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Granularity {
    /// One `YYYY/MM/DD` parameter per bound, widened to the whole local day.
    Date,
    /// Split date/time parameters per bound, used as an exact instant.
    DateTime,
}

/// Which calendar the submitted strings are written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalendarSystem {
    Gregorian,
    Jalali,
}

/// Inclusive, timezone-aware range bounds parsed from query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeBounds {
    pub gte: Option<DateTime<FixedOffset>>,
    pub lte: Option<DateTime<FixedOffset>>,
}

enum Bound {
    Lower,
    Upper,
}

/// From/to range filter over a single datetime column.
#[derive(Clone, Debug)]
pub struct DateRangeFilter {
    field_path: String,
    granularity: Granularity,
    calendar: CalendarSystem,
    gte_param: String,
    lte_param: String,
}

impl DateRangeFilter {
    pub fn new(field_path: impl Into<String>, granularity: Granularity, calendar: CalendarSystem) -> Self {
        let field_path = field_path.into();
        let gte_param = format!("{field_path}{RANGE_GTE_SUFFIX}");
        let lte_param = format!("{field_path}{RANGE_LTE_SUFFIX}");
        Self {
            field_path,
            granularity,
            calendar,
            gte_param,
            lte_param,
        }
    }

    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Query parameter names this filter reads.
    ///
    /// Datetime filters split every bound into a `_0` date half and a `_1`
    /// time half, matching the split widget layout.
    pub fn expected_parameters(&self) -> Vec<String> {
        let params = [&self.gte_param, &self.lte_param];
        match self.granularity {
            Granularity::Date => params.into_iter().cloned().collect(),
            Granularity::DateTime => params
                .into_iter()
                .flat_map(|param| [format!("{param}_0"), format!("{param}_1")])
                .collect(),
        }
    }

    /// Parse the submitted parameters into inclusive range bounds.
    ///
    /// A missing or blank parameter leaves that bound absent. Date-only
    /// bounds widen to `[local midnight, local 23:59:59.999999]`.
    pub fn bounds(&self, params: &HashMap<String, String>) -> Result<RangeBounds, JalalifyError> {
        Ok(RangeBounds {
            gte: self.parse_bound(params, &self.gte_param, Bound::Lower)?,
            lte: self.parse_bound(params, &self.lte_param, Bound::Upper)?,
        })
    }

    /// Translate the submitted parameters into a SeaORM condition.
    ///
    /// Mirrors form semantics at the request boundary: malformed input is
    /// logged and leaves the filter inactive instead of failing the request.
    /// Use [`DateRangeFilter::bounds`] to observe the error itself.
    pub fn condition<C: ColumnTrait>(&self, params: &HashMap<String, String>, column: C) -> Condition {
        match self.bounds(params) {
            Ok(bounds) => {
                let mut condition = Condition::all();
                if let Some(gte) = bounds.gte {
                    condition = condition.add(column.gte(gte));
                }
                if let Some(lte) = bounds.lte {
                    condition = condition.add(column.lte(lte));
                }
                condition
            }
            Err(err) => {
                log::warn!("{} range filter left inactive: {}", self.field_path, err);
                Condition::all()
            }
        }
    }

    fn parse_bound(
        &self,
        params: &HashMap<String, String>,
        param: &str,
        bound: Bound,
    ) -> Result<Option<DateTime<FixedOffset>>, JalalifyError> {
        let zone = Config::shared().fixed_zone();
        match self.granularity {
            Granularity::Date => {
                let Some(raw) = non_blank(params.get(param)) else {
                    return Ok(None);
                };
                let date = self.parse_date_value(raw)?;
                let clock = match bound {
                    Bound::Lower => NaiveTime::MIN,
                    Bound::Upper => end_of_day(),
                };
                Ok(Some(localized(zone, date, clock)))
            }
            Granularity::DateTime => {
                let date_raw = non_blank(params.get(&format!("{param}_0")));
                let time_raw = non_blank(params.get(&format!("{param}_1")));
                match (date_raw, time_raw) {
                    (None, None) => Ok(None),
                    (Some(date_raw), Some(time_raw)) => {
                        let date = self.parse_date_value(date_raw)?;
                        let clock = parse_clock(time_raw)?;
                        Ok(Some(localized(zone, date, clock)))
                    }
                    _ => Err(JalalifyError::Format(format!(
                        "{param} needs both its date and time halves"
                    ))),
                }
            }
        }
    }

    /// Calendar strategy: the date half is the only part the calendars
    /// disagree on.
    fn parse_date_value(&self, raw: &str) -> Result<NaiveDate, JalalifyError> {
        match self.calendar {
            CalendarSystem::Jalali => {
                let (year, month, day) = parse_ymd(raw)?;
                jalali_to_gregorian(year, month, day)
            }
            CalendarSystem::Gregorian => NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
                .map_err(|err| JalalifyError::Format(format!("{raw:?} does not match YYYY/MM/DD: {err}"))),
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN)
}

fn localized(zone: FixedZone, date: NaiveDate, clock: NaiveTime) -> DateTime<FixedOffset> {
    zone.localize(date.and_time(clock)).fixed_offset()
}
