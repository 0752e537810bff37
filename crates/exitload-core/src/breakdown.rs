//! Twelve-row breakdown table.

use serde::Serialize;

use crate::constants::{CURRENCY_SYMBOL, DAYS_PER_YEAR};
use crate::currency::format_currency;
use crate::result::CalculationResult;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub parameter: &'static str,
    pub value: String,
    pub description: &'static str,
}

impl BreakdownRow {
    fn new(parameter: &'static str, value: String, description: &'static str) -> Self {
        Self {
            parameter,
            value,
            description,
        }
    }
}

/// Build the breakdown rows for a result.
#[must_use]
pub fn breakdown_rows(r: &CalculationResult) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::new(
            "Investment Amount",
            format_currency(r.investment_amount),
            "Original amount invested",
        ),
        BreakdownRow::new(
            "Purchase NAV",
            format!("{CURRENCY_SYMBOL}{}", r.purchase_nav),
            "NAV when units were purchased",
        ),
        BreakdownRow::new(
            "Current NAV",
            format!("{CURRENCY_SYMBOL}{}", r.current_nav),
            "Current NAV of the fund",
        ),
        BreakdownRow::new(
            "Units Held",
            format!("{:.4}", r.units_held),
            "Number of units owned",
        ),
        BreakdownRow::new(
            "Current Value",
            format_currency(r.current_value),
            "Current market value of investment",
        ),
        BreakdownRow::new(
            "Gains/Loss",
            format_currency(r.total_gain_loss),
            "Profit or loss on investment",
        ),
        BreakdownRow::new(
            "Redemption Amount",
            format_currency(r.redemption_amount),
            "Amount to be redeemed from investment",
        ),
        BreakdownRow::new(
            "Exit Load Period",
            format!("{:.1} years", r.exit_load_period / DAYS_PER_YEAR),
            "Period during which exit load applies",
        ),
        BreakdownRow::new(
            "Exit Load Rate",
            format!("{}%", r.exit_load_rate),
            "Percentage charged as exit load",
        ),
        BreakdownRow::new(
            "Exit Load Applicable",
            if r.exit_load_applicable { "Yes" } else { "No" }.to_string(),
            "Whether exit load will be charged",
        ),
        BreakdownRow::new(
            "Exit Load Charge",
            format_currency(r.exit_load_charge),
            "Amount charged as exit load",
        ),
        BreakdownRow::new(
            "Net Redemption Amount",
            format_currency(r.net_redemption_amount),
            "Final amount after exit load deduction",
        ),
    ]
}
