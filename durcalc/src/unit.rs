const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Duration units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Years,
    Quarters,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Years,
        Unit::Quarters,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Milliseconds,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Short token used in duration strings, e.g. `mon` for months.
    pub fn token(self) -> &'static str {
        match self {
            Unit::Years => "y",
            Unit::Quarters => "q",
            Unit::Months => "mon",
            Unit::Weeks => "w",
            Unit::Days => "d",
            Unit::Hours => "h",
            Unit::Minutes => "min",
            Unit::Seconds => "s",
            Unit::Milliseconds => "ms",
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.token() == token)
    }

    pub fn singular(self) -> &'static str {
        match self {
            Unit::Years => "year",
            Unit::Quarters => "quarter",
            Unit::Months => "month",
            Unit::Weeks => "week",
            Unit::Days => "day",
            Unit::Hours => "hour",
            Unit::Minutes => "minute",
            Unit::Seconds => "second",
            Unit::Milliseconds => "millisecond",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Quarters => "quarters",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
        }
    }

    /// Length in milliseconds under the casual calendar: 365-day years,
    /// 91-day quarters, 30-day months.
    pub(crate) fn casual_millis(self) -> f64 {
        match self {
            Unit::Years => 365.0 * MS_PER_DAY,
            Unit::Quarters => 91.0 * MS_PER_DAY,
            Unit::Months => 30.0 * MS_PER_DAY,
            Unit::Weeks => 7.0 * MS_PER_DAY,
            Unit::Days => MS_PER_DAY,
            Unit::Hours => MS_PER_HOUR,
            Unit::Minutes => MS_PER_MINUTE,
            Unit::Seconds => MS_PER_SECOND,
            Unit::Milliseconds => 1.0,
        }
    }
}

/// How many `to` fit in one `from`, for `from` at least as large as `to`.
///
/// Calendar units convert among themselves by count (a year is 52 weeks,
/// a month is 4 weeks), everything else goes through the day length.
pub(crate) fn conversion_factor(from: Unit, to: Unit) -> f64 {
    match (from, to) {
        _ if from == to => 1.0,
        (Unit::Years, Unit::Quarters) => 4.0,
        (Unit::Years, Unit::Months) => 12.0,
        (Unit::Years, Unit::Weeks) => 52.0,
        (Unit::Quarters, Unit::Months) => 3.0,
        (Unit::Quarters, Unit::Weeks) => 13.0,
        (Unit::Months, Unit::Weeks) => 4.0,
        _ => from.casual_millis() / to.casual_millis(),
    }
}
