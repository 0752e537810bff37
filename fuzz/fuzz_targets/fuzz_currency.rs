#![no_main]

use libfuzzer_sys::fuzz_target;

use exitload_core::currency::format_currency;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let amount = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let formatted = format_currency(amount);

    // Sign, then symbol, then digits grouped by commas
    let body = formatted.strip_prefix('-').unwrap_or(&formatted);
    let digits = body.strip_prefix('\u{20B9}').expect("missing rupee symbol");
    assert!(!digits.is_empty());
    assert!(digits.chars().all(|c| c.is_ascii_digit() || c == ','));
    assert!(!digits.starts_with(',') && !digits.ends_with(','));
    assert_eq!(formatted, format_currency(amount.round()));
});
