use crate::Unit;

const MAX_FRACTION_DIGITS: i32 = 3;

/// Format a magnitude the way an English locale does: thousands separators
/// and at most three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let scale = 10f64.powi(MAX_FRACTION_DIGITS);
    let rounded = (value * scale).round() / scale;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let whole = abs.trunc();
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&format!("{:.0}", whole)));

    let fraction = format!("{:.3}", abs - whole);
    let digits = fraction
        .split_once('.')
        .map(|(_, digits)| digits.trim_end_matches('0'))
        .unwrap_or("");
    if !digits.is_empty() {
        out.push('.');
        out.push_str(digits);
    }
    out
}

/// "1 hour", "2 hours", "1.5 days"
pub(crate) fn unit_phrase(value: f64, unit: Unit) -> String {
    let number = format_number(value);
    let name = if number == "1" || number == "-1" {
        unit.singular()
    } else {
        unit.plural()
    };
    format!("{} {}", number, name)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(2.00049), "2");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_unit_phrase_plurals() {
        assert_eq!(unit_phrase(1.0, Unit::Hours), "1 hour");
        assert_eq!(unit_phrase(-1.0, Unit::Days), "-1 day");
        assert_eq!(unit_phrase(2.0, Unit::Minutes), "2 minutes");
        assert_eq!(unit_phrase(1.5, Unit::Weeks), "1.5 weeks");
        assert_eq!(unit_phrase(0.0, Unit::Seconds), "0 seconds");
    }
}
