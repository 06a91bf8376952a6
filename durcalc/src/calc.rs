use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::UtcOffset;

use crate::{format_date, format_duration, parse_date_input, parse_duration_input};

/// What the calculator combines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// duration ± duration
    #[default]
    #[strum(ascii_case_insensitive, serialize = "durations")]
    Durations,
    /// date ± duration
    #[strum(ascii_case_insensitive, serialize = "duration-to-date")]
    DurationToDate,
    /// date - date
    #[strum(ascii_case_insensitive, serialize = "date-difference")]
    DateDifference,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Durations, Mode::DurationToDate, Mode::DateDifference];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Durations => "Duration ± duration",
            Mode::DurationToDate => "Date ± duration",
            Mode::DateDifference => "Date difference",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "plus")]
    Plus,
    #[strum(ascii_case_insensitive, serialize = "minus")]
    Minus,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Plus, Operation::Minus];

    pub fn symbol(self) -> char {
        match self {
            Operation::Plus => '+',
            Operation::Minus => '-',
        }
    }
}

/// Raw text of the four calculator inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operands<'a> {
    pub duration_a: &'a str,
    pub duration_b: &'a str,
    pub date_a: &'a str,
    pub date_b: &'a str,
}

/// Compute the displayed result for `mode`.
///
/// Returns `None` when an operand the mode needs is invalid. A date that
/// falls outside the representable range shows its invalid reason instead.
/// The date difference is always B minus A, whatever `operation` says.
pub fn calculate(
    mode: Mode,
    operation: Operation,
    operands: &Operands<'_>,
    offset: UtcOffset,
) -> Option<String> {
    match mode {
        Mode::Durations => {
            let a = parse_duration_input(operands.duration_a).ok()?;
            let b = parse_duration_input(operands.duration_b).ok()?;
            let result = match operation {
                Operation::Plus => a.plus(&b),
                Operation::Minus => a.minus(&b),
            };
            Some(format_duration(&result))
        }
        Mode::DurationToDate => {
            let a = parse_date_input(operands.date_a).ok()?;
            let b = parse_duration_input(operands.duration_b).ok()?;
            let result = match operation {
                Operation::Plus => a.plus(&b),
                Operation::Minus => a.minus(&b),
            };
            Some(match result {
                Ok(date) => format_date(&date, offset),
                Err(invalid) => invalid.reason,
            })
        }
        Mode::DateDifference => {
            let a = parse_date_input(operands.date_a).ok()?;
            let b = parse_date_input(operands.date_b).ok()?;
            Some(format_duration(&b.diff(&a)))
        }
    }
}
