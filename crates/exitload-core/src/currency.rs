//! Rupee formatting with Indian digit grouping.
//!
//! The rightmost three digits form one group and every group to the left of
//! it has two digits: `12345678` renders as `1,23,45,678`.

use crate::constants::CURRENCY_SYMBOL;

/// Format an optional amount; `None` renders as zero.
#[must_use]
pub fn format_currency_opt(amount: Option<f64>) -> String {
    format_currency(amount.unwrap_or(0.0))
}

/// Format an amount as a whole-rupee string such as `-₹1,23,456`.
///
/// Non-finite input is treated as zero. The magnitude is rounded half away
/// from zero, and the minus sign is only printed when the rounded magnitude
/// is non-zero, so `-0.0` and `-0.4` both render as `₹0`.
///
/// # Example
/// ```
/// use exitload_core::currency::format_currency;
/// assert_eq!(format_currency(1_234_567.0), "₹12,34,567");
/// assert_eq!(format_currency(-100_000.0), "-₹1,00,000");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let magnitude = amount.abs().round();
    let digits = format!("{magnitude:.0}");

    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 4);
    if amount < 0.0 && magnitude > 0.0 {
        out.push('-');
    }
    out.push(CURRENCY_SYMBOL);
    out.push_str(&group_indian(&digits));
    out
}

/// Insert Indian-style separators into a plain ASCII digit string.
#[must_use]
pub fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut out = String::with_capacity(len + len / 2);
    // A leading odd-length head gets a single digit before the first pair.
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}
