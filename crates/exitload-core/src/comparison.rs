//! Redemption comparison series for the line chart.

use crate::constants::{
    COMPARISON_FLOOR, COMPARISON_LAST_MULTIPLIER, COMPARISON_MULTIPLIERS, FALLBACK_CURRENT_VALUE,
};
use crate::result::CalculationResult;

/// One candidate redemption amount and what it would yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonPoint {
    pub redemption_amount: f64,
    pub net_amount: f64,
    pub exit_load_charge: f64,
}

/// Ten candidate redemption amounts scaled from the current value.
#[must_use]
pub fn candidate_amounts(current_value: f64) -> [f64; 10] {
    let cv = if current_value == 0.0 || !current_value.is_finite() {
        FALLBACK_CURRENT_VALUE
    } else {
        current_value
    };

    let mut amounts = [0.0; 10];
    for (slot, multiplier) in amounts.iter_mut().zip(COMPARISON_MULTIPLIERS) {
        *slot = cv * multiplier;
    }
    amounts[9] = (cv * COMPARISON_LAST_MULTIPLIER).max(COMPARISON_FLOOR);
    amounts
}

/// Exit load charged on `amount` at `rate` percent.
#[must_use]
pub fn exit_load_on(amount: f64, rate: f64) -> f64 {
    if rate > 0.0 && amount > 0.0 {
        amount * rate / 100.0
    } else {
        0.0
    }
}

/// Build the comparison series for a result.
#[must_use]
pub fn comparison_series(result: &CalculationResult) -> Vec<ComparisonPoint> {
    candidate_amounts(result.current_value)
        .into_iter()
        .map(|amount| {
            let charge = exit_load_on(amount, result.exit_load_rate);
            ComparisonPoint {
                redemption_amount: amount,
                net_amount: amount - charge,
                exit_load_charge: charge,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_scale_with_current_value() {
        let amounts = candidate_amounts(200_000.0);
        assert!(amounts[0].abs() < f64::EPSILON);
        assert!((amounts[1] - 20_000.0).abs() < 1e-6);
        assert!((amounts[5] - 200_000.0).abs() < f64::EPSILON);
        assert!((amounts[8] - 400_000.0).abs() < f64::EPSILON);
        assert!((amounts[9] - 1_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn last_candidate_exceeds_floor_for_large_values() {
        let amounts = candidate_amounts(500_000.0);
        assert!((amounts[9] - 1_500_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_current_value_falls_back() {
        let amounts = candidate_amounts(0.0);
        assert!((amounts[5] - 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exit_load_requires_positive_rate_and_amount() {
        assert!(exit_load_on(0.0, 1.0).abs() < f64::EPSILON);
        assert!(exit_load_on(1000.0, 0.0).abs() < f64::EPSILON);
        assert!(exit_load_on(1000.0, -1.0).abs() < f64::EPSILON);
        assert!((exit_load_on(1000.0, 1.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn series_net_plus_charge_is_amount() {
        let result = CalculationResult {
            current_value: 120_000.0,
            exit_load_rate: 1.0,
            ..CalculationResult::default()
        };
        let series = comparison_series(&result);
        assert_eq!(series.len(), 10);
        for p in &series {
            assert!((p.net_amount + p.exit_load_charge - p.redemption_amount).abs() < 1e-6);
        }
        assert!((series[5].exit_load_charge - 1200.0).abs() < 1e-6);
    }
}
