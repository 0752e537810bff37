//! Lenient numeric parsing for free-typed field text.

use std::num::FpCategory;

/// Parse field text the way a browser's `parseFloat(text) || 0` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12abc"` parses as 12 and `"1e3x"` as 1000. Text with no numeric prefix,
/// and `NaN`, yield 0; `"-0"` yields positive 0. `"Infinity"` (optionally
/// signed) yields an infinity, which the caller clamps on commit.
#[must_use]
pub fn parse_input(text: &str) -> f64 {
    let value = parse_prefix(text.trim_start()).unwrap_or(0.0);
    match value.classify() {
        FpCategory::Nan | FpCategory::Zero => 0.0,
        _ => value,
    }
}

fn parse_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
