use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::human::unit_phrase;
use crate::unit::conversion_factor;
use crate::{Invalid, Unit, Validated, INVALID_DURATION_TOKEN, INVALID_DURATION_VALUE};

static TOKEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

/// A signed span of time as per-unit magnitudes.
///
/// Units that were never set are distinct from units set to zero; only set
/// units take part in arithmetic and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    values: [Option<f64>; 9],
}

impl Duration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (unit, magnitude) pairs. A repeated unit keeps its last value.
    pub fn from_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = (Unit, f64)>,
    {
        let mut duration = Self::new();
        for (unit, value) in units {
            duration.set(unit, value);
        }
        duration
    }

    pub fn milliseconds(ms: f64) -> Self {
        Self::new().with(Unit::Milliseconds, ms)
    }

    pub fn get(&self, unit: Unit) -> Option<f64> {
        self.values[unit.index()]
    }

    pub fn set(&mut self, unit: Unit, value: f64) {
        self.values[unit.index()] = Some(value);
    }

    pub fn with(mut self, unit: Unit, value: f64) -> Self {
        self.set(unit, value);
        self
    }

    /// Magnitude of `unit`, zero when unset.
    pub fn value_or_zero(&self, unit: Unit) -> f64 {
        self.get(unit).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Set units, largest first.
    pub fn units(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL
            .into_iter()
            .filter_map(|unit| self.get(unit).map(|value| (unit, value)))
    }

    /// Unit-wise sum over every unit set on either side.
    pub fn plus(&self, other: &Duration) -> Duration {
        let mut result = Duration::new();
        for unit in Unit::ALL {
            if self.get(unit).is_some() || other.get(unit).is_some() {
                result.set(unit, self.value_or_zero(unit) + other.value_or_zero(unit));
            }
        }
        result
    }

    pub fn minus(&self, other: &Duration) -> Duration {
        self.plus(&other.negate())
    }

    pub fn negate(&self) -> Duration {
        let mut result = *self;
        for value in result.values.iter_mut().flatten() {
            *value = -*value;
        }
        result
    }

    pub fn as_milliseconds(&self) -> f64 {
        self.units()
            .map(|(unit, value)| value * unit.casual_millis())
            .sum()
    }

    /// Carry overflow between the set units without introducing new ones.
    pub fn normalize(&self) -> Duration {
        let mut result = *self;
        normalize_values(&mut result.values);
        result
    }

    /// Express the duration in every unit, whole numbers cascading down and
    /// overflow carried up.
    pub fn shift_to_all(&self) -> Duration {
        let mut built = [None; 9];
        let mut carried = 0.0;
        let mut carried_from: Option<Unit> = None;

        for unit in Unit::ALL {
            let mut own = self.value_or_zero(unit);
            if let Some(from) = carried_from {
                own += carried * conversion_factor(from, unit);
            }
            let whole = own.trunc();
            built[unit.index()] = Some(whole);
            carried = (own * 1000.0 - whole * 1000.0) / 1000.0;
            carried_from = Some(unit);
        }

        if carried != 0.0 {
            if let Some(ms) = built[Unit::Milliseconds.index()].as_mut() {
                *ms += carried;
            }
        }

        normalize_values(&mut built);
        Duration { values: built }
    }

    pub fn remove_zeroes(&self) -> Duration {
        let mut result = *self;
        for slot in result.values.iter_mut() {
            if *slot == Some(0.0) {
                *slot = None;
            }
        }
        result
    }

    /// Largest-to-smallest breakdown with no zero entries.
    pub fn rescale(&self) -> Duration {
        self.normalize().shift_to_all().remove_zeroes()
    }

    /// English phrase for the set units, e.g. "1 hour, 30 minutes".
    ///
    /// An empty duration reads "0 seconds".
    pub fn to_human(&self) -> String {
        if self.is_empty() {
            return unit_phrase(0.0, Unit::Seconds);
        }
        self.units()
            .map(|(unit, value)| unit_phrase(value, unit))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human())
    }
}

/// Rescale then render as a phrase.
pub fn format_duration(duration: &Duration) -> String {
    duration.rescale().to_human()
}

/// Parse a token string such as `1y3mon20d` or `90min`.
///
/// The input alternates numeric values and unit tokens. A trailing value with
/// no token after it is ignored. Parsing stops at the first bad pair.
pub fn parse_duration_input(input: &str) -> Validated<Duration> {
    let parts = split_on_tokens(input);
    let mut duration = Duration::new();

    for pair in parts.chunks_exact(2) {
        let (raw_value, token) = (pair[0], pair[1]);
        let Some(value) = parse_number(raw_value) else {
            tracing::trace!(input, raw_value, "invalid duration value");
            return Err(Invalid::new(INVALID_DURATION_VALUE));
        };
        let Some(unit) = Unit::from_token(token) else {
            tracing::trace!(input, token, "invalid duration token");
            return Err(Invalid::new(INVALID_DURATION_TOKEN));
        };
        duration.set(unit, value);
    }

    Ok(duration)
}

/// Split around alphabetic runs, keeping the runs: `"1y3mon"` becomes
/// `["1", "y", "3", "mon", ""]`.
fn split_on_tokens(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for token in TOKEN_RUN.find_iter(input) {
        parts.push(&input[last..token.start()]);
        parts.push(token.as_str());
        last = token.end();
    }
    parts.push(&input[last..]);
    parts
}

/// Numeric conversion with blank-is-zero semantics: surrounding whitespace is
/// ignored and an empty value counts as `0`.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Carry whole overflow from smaller set units into the next larger set unit,
/// then push fractional parts back down.
fn normalize_values(values: &mut [Option<f64>; 9]) {
    let total: f64 = Unit::ALL
        .into_iter()
        .filter_map(|unit| values[unit.index()].map(|v| v * unit.casual_millis()))
        .sum();
    let sign = if total < 0.0 { -1.0 } else { 1.0 };

    let mut smaller: Option<Unit> = None;
    for current in Unit::ALL.into_iter().rev() {
        let Some(current_value) = values[current.index()] else {
            continue;
        };
        if let Some(prev) = smaller {
            let prev_value = values[prev.index()].unwrap_or(0.0);
            let conv = conversion_factor(current, prev);
            let roll_up = (prev_value * sign / conv).floor();
            values[current.index()] = Some(current_value + roll_up * sign);
            values[prev.index()] = Some(prev_value - roll_up * conv * sign);
        }
        smaller = Some(current);
    }

    let mut larger: Option<Unit> = None;
    for current in Unit::ALL {
        let Some(current_value) = values[current.index()] else {
            continue;
        };
        if let Some(prev) = larger {
            let prev_value = values[prev.index()].unwrap_or(0.0);
            let fraction = prev_value % 1.0;
            values[prev.index()] = Some(prev_value - fraction);
            values[current.index()] =
                Some(current_value + fraction * conversion_factor(prev, current));
        }
        larger = Some(current);
    }
}
