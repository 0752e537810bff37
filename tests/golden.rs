//! Golden file integration tests.
//!
//! Reads tests/testdata/currency_golden.json and verifies the rupee formatter
//! and everything that renders through it.

use serde::Deserialize;

use exitload_core::currency::{format_currency, format_currency_opt};
use exitload_core::result::CalculationResult;
use exitload_core::view::ResultsView;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    amount: Option<f64>,
    formatted: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/currency_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Golden: formatter
// ---------------------------------------------------------------------------

#[test]
fn golden_format_currency() {
    let data = load_golden_data();
    assert!(!data.values.is_empty());
    for entry in &data.values {
        assert_eq!(
            format_currency_opt(entry.amount),
            entry.formatted,
            "mismatch for amount {:?}",
            entry.amount,
        );
    }
}

#[test]
fn golden_rounded_input_formats_identically() {
    let data = load_golden_data();
    for entry in data.values.iter().filter_map(|e| e.amount) {
        assert_eq!(
            format_currency(entry),
            format_currency(entry.round()),
            "rounding mismatch for amount {entry}",
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: decoded response through the view
// ---------------------------------------------------------------------------

#[test]
fn golden_response_renders_every_slot() {
    let body = r#"{
        "net_redemption_amount": 1234567.4,
        "current_value": 1246914.0,
        "exit_load_charge": 12346.6,
        "total_gain_loss": -98765432.1,
        "exit_load_applicable": true,
        "investment_amount": 100000,
        "gains_earned": 999.5
    }"#;
    let result = CalculationResult::from_json(body).unwrap();
    let mut view = ResultsView::new();
    view.apply(&result);

    assert_eq!(view.slots.net_redemption, "₹12,34,567");
    assert_eq!(view.slots.current_value, "₹12,46,914");
    assert_eq!(view.slots.exit_load_charge, "₹12,347");
    assert_eq!(view.slots.total_gain_loss, "-₹9,87,65,432");
    assert_eq!(view.slots.investment_amount, "₹1,00,000");
    assert_eq!(view.slots.gains_earned, "₹1,000");

    let chart = view.proportion.get().unwrap();
    assert_eq!(chart.center_text, "₹12,34,567");
    assert_eq!(chart.tooltip(0).unwrap(), "Investment Amount: ₹1,00,000");
}

#[test]
fn golden_missing_members_render_as_zero() {
    let result = CalculationResult::from_json("{}").unwrap();
    let mut view = ResultsView::new();
    view.apply(&result);
    for slot in [
        &view.slots.net_redemption,
        &view.slots.current_value,
        &view.slots.exit_load_charge,
        &view.slots.total_gain_loss,
        &view.slots.investment_amount,
        &view.slots.gains_earned,
    ] {
        assert_eq!(slot, "₹0");
    }
    assert_eq!(view.status.map(|s| s.label()), Some("Not Applicable"));
}
