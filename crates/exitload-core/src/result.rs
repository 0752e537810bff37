//! Calculation result returned by the endpoint.

use serde::{Deserialize, Serialize};

/// Result record returned by the calculation endpoint.
///
/// Missing members decode as zero (or `false`), matching how the display
/// treats absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationResult {
    pub net_redemption_amount: f64,
    pub current_value: f64,
    pub exit_load_charge: f64,
    pub total_gain_loss: f64,
    pub exit_load_applicable: bool,
    pub investment_amount: f64,
    pub gains_earned: f64,
    pub purchase_nav: f64,
    pub current_nav: f64,
    pub units_held: f64,
    pub redemption_amount: f64,
    /// Days.
    pub exit_load_period: f64,
    /// Percent.
    pub exit_load_rate: f64,
}

impl CalculationResult {
    /// Decode a response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let body = r#"{
            "net_redemption_amount": 118800.0,
            "current_value": 120000.0,
            "exit_load_charge": 1200.0,
            "total_gain_loss": 20000.0,
            "exit_load_applicable": true,
            "investment_amount": 100000.0,
            "gains_earned": 20000.0,
            "purchase_nav": 10.0,
            "current_nav": 12.0,
            "units_held": 10000.0,
            "redemption_amount": 120000.0,
            "exit_load_period": 365.0,
            "exit_load_rate": 1.0
        }"#;
        let result = CalculationResult::from_json(body).unwrap();
        assert!(result.exit_load_applicable);
        assert!((result.net_redemption_amount - 118_800.0).abs() < f64::EPSILON);
        assert!((result.units_held - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_members_default_to_zero() {
        let result = CalculationResult::from_json(r#"{"current_value": 5}"#).unwrap();
        assert!((result.current_value - 5.0).abs() < f64::EPSILON);
        assert!(result.exit_load_charge.abs() < f64::EPSILON);
        assert!(!result.exit_load_applicable);
    }

    #[test]
    fn unknown_members_are_ignored() {
        let result = CalculationResult::from_json(r#"{"extra": "x", "gains_earned": 1}"#);
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(CalculationResult::from_json("not json").is_err());
        assert!(CalculationResult::from_json(r#"{"current_value": "abc"}"#).is_err());
    }
}
