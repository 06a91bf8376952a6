//! Duration and date arithmetic behind the durcalc calculator.
//!
//! Durations are bags of per-unit magnitudes parsed from token strings like
//! `1y3mon20d`. Dates are local wall-clock date-times. Anything that fails to
//! parse or compute is carried as an [`Invalid`] value with a display reason.

mod calc;
mod date;
mod duration;
mod human;
mod invalid;
mod unit;

pub use calc::*;
pub use date::*;
pub use duration::*;
pub use human::format_number;
pub use invalid::*;
pub use unit::*;
