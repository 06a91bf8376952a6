use anyhow::{bail, Result};
use durcalc::{
    calculate, parse_date_input, parse_duration_input, Mode, Operands, Operation, Validity,
};
use time::UtcOffset;

/// Compute a single result outside the TUI.
///
/// `a` and `b` are read as the two fields the interactive calculator shows for
/// `mode`. When the result is blank the first invalid operand is reported.
pub fn evaluate(
    mode: Mode,
    operation: Operation,
    a: &str,
    b: &str,
    offset: UtcOffset,
) -> Result<String> {
    let operands = match mode {
        Mode::Durations => Operands {
            duration_a: a,
            duration_b: b,
            ..Default::default()
        },
        Mode::DurationToDate => Operands {
            date_a: a,
            duration_b: b,
            ..Default::default()
        },
        Mode::DateDifference => Operands {
            date_a: a,
            date_b: b,
            ..Default::default()
        },
    };

    if let Some(result) = calculate(mode, operation, &operands, offset) {
        return Ok(result);
    }

    let a_is_date = mode != Mode::Durations;
    let b_is_date = mode == Mode::DateDifference;
    for (label, text, is_date) in [("first", a, a_is_date), ("second", b, b_is_date)] {
        let reason = if is_date {
            parse_date_input(text).invalid_reason().map(str::to_owned)
        } else {
            parse_duration_input(text).invalid_reason().map(str::to_owned)
        };
        if let Some(reason) = reason {
            bail!("{} operand {:?}: {}", label, text, reason);
        }
    }
    bail!("no result")
}
