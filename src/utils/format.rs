//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display in local time
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a date only
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Insert thousand separators into a run of ASCII digits
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a number with thousand separators and at most three fraction
/// digits, trailing zeros dropped (`1234.5` → `1,234.5`).
pub fn format_grouped(n: f64) -> String {
    if !n.is_finite() {
        return if n.is_nan() {
            "NaN".to_string()
        } else if n > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = group_digits(int_part);
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if n < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_are_grouped_with_short_fractions() {
        assert_eq!(format_grouped(1234.0), "1,234");
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(1_000_000.1234), "1,000,000.123");
        assert_eq!(format_grouped(-9876.0), "-9,876");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(12.0), "12");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(-1_234_567.0), "-1,234,567");
    }
}
