use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

use crate::{
    Duration, Invalid, Unit, Validated, DATE_OUT_OF_RANGE, UNIT_OUT_OF_RANGE, UNPARSABLE,
};

static ISO_LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2})(?:[T ]([0-9]{2})(?::([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]{1,9}))?)?)?)?)?)?$",
    )
    .unwrap()
});

/// A local wall-clock date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(PrimitiveDateTime);

impl DateTime {
    pub fn new(inner: PrimitiveDateTime) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> PrimitiveDateTime {
        self.0
    }

    /// Add a duration: years, months and quarters move the calendar month
    /// (clamping the day to the month's length), then days and weeks move the
    /// calendar day, then everything left is added as elapsed time.
    pub fn plus(&self, duration: &Duration) -> Validated<DateTime> {
        let whole = |unit: Unit| duration.value_or_zero(unit).trunc();

        let months = whole(Unit::Years) * 12.0 + whole(Unit::Months) + whole(Unit::Quarters) * 3.0;
        let days = whole(Unit::Days) + whole(Unit::Weeks) * 7.0;

        let date = shift_months(self.0.date(), months)?;
        let date = shift_days(date, days)?;

        let remainder = Duration::from_units(Unit::ALL.into_iter().map(|unit| {
            let value = duration.value_or_zero(unit);
            match unit {
                Unit::Years | Unit::Quarters | Unit::Months | Unit::Weeks | Unit::Days => {
                    (unit, value - value.trunc())
                }
                _ => (unit, value),
            }
        }));
        let millis = remainder.as_milliseconds().round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(out_of_range());
        }

        PrimitiveDateTime::new(date, self.0.time())
            .checked_add(time::Duration::milliseconds(millis as i64))
            .map(DateTime)
            .ok_or_else(out_of_range)
    }

    pub fn minus(&self, duration: &Duration) -> Validated<DateTime> {
        self.plus(&duration.negate())
    }

    /// Elapsed time from `other` to `self`, in milliseconds.
    pub fn diff(&self, other: &DateTime) -> Duration {
        let elapsed = self.0 - other.0;
        Duration::milliseconds(elapsed.whole_milliseconds() as f64)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parse the browser `datetime-local` shape (`2024-01-01T09:30`) and its
/// shorter and longer ISO-8601 relatives. Missing parts default to the start
/// of the period.
pub fn parse_date_input(input: &str) -> Validated<DateTime> {
    let Some(caps) = ISO_LOCAL.captures(input) else {
        return Err(Invalid::with_explanation(
            UNPARSABLE,
            format!("the input \"{}\" can't be parsed as ISO 8601", input),
        ));
    };

    let field = |i: usize, default: u32| -> u32 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(default)
    };
    let nanos = caps
        .get(7)
        .map(|m| {
            let digits = m.as_str();
            let scale = 10u32.pow(9 - digits.len() as u32);
            digits.parse::<u32>().unwrap_or(0) * scale
        })
        .unwrap_or(0);

    let year = field(1, 0) as i32;
    let date = u8::try_from(field(2, 1))
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| unit_out_of_range(input, "month"))
        .and_then(|month| {
            Date::from_calendar_date(year, month, field(3, 1) as u8)
                .map_err(|e| unit_out_of_range(input, e.name()))
        })?;
    let time = Time::from_hms_nano(
        field(4, 0) as u8,
        field(5, 0) as u8,
        field(6, 0) as u8,
        nanos,
    )
    .map_err(|e| unit_out_of_range(input, e.name()))?;

    Ok(DateTime(PrimitiveDateTime::new(date, time)))
}

/// Full English date-time with the zone offset, e.g.
/// "January 1, 2024 at 12:00 AM UTC".
pub fn format_date(date: &DateTime, offset: UtcOffset) -> String {
    let description = format_description!(
        "[month repr:long] [day padding:none], [year padding:none] at [hour repr:12 padding:none]:[minute] [period]"
    );
    match date.0.assume_offset(offset).format(description) {
        Ok(text) => format!("{} {}", text, offset_label(offset)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to format date");
            date.to_string()
        }
    }
}

fn offset_label(offset: UtcOffset) -> String {
    if offset.is_utc() {
        return "UTC".to_string();
    }
    let (hours, minutes, _) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    format!("UTC{}{:02}:{:02}", sign, hours.abs(), minutes.abs())
}

fn shift_months(date: Date, months: f64) -> Validated<Date> {
    if months.abs() > 1_000_000.0 {
        return Err(out_of_range());
    }
    let index = date.year() as i64 * 12 + (u8::from(date.month()) as i64 - 1) + months as i64;
    let year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = Month::try_from(index.rem_euclid(12) as u8 + 1).map_err(|_| out_of_range())?;
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).map_err(|_| out_of_range())
}

fn shift_days(date: Date, days: f64) -> Validated<Date> {
    if days.abs() > 10_000_000.0 {
        return Err(out_of_range());
    }
    date.checked_add(time::Duration::days(days as i64))
        .ok_or_else(out_of_range)
}

fn unit_out_of_range(input: &str, component: &str) -> Invalid {
    Invalid::with_explanation(
        UNIT_OUT_OF_RANGE,
        format!("{} in \"{}\" is out of range", component, input),
    )
}

fn out_of_range() -> Invalid {
    Invalid::new(DATE_OUT_OF_RANGE)
}
