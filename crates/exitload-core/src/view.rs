//! Presentation model for a calculation result.
//!
//! [`ResultsView`] holds everything a host draws: display slots, the status
//! label, the two charts, and the breakdown table. Charts live in
//! [`ChartSlot`]s so a redraw disposes the previous chart before the new one
//! is built.

use tracing::debug;

use crate::breakdown::{breakdown_rows, BreakdownRow};
use crate::comparison::{comparison_series, ComparisonPoint};
use crate::constants::{
    CENTER_CAPTION, STATUS_APPLICABLE, STATUS_APPLICABLE_COLOR, STATUS_NOT_APPLICABLE,
    STATUS_NOT_APPLICABLE_COLOR,
};
use crate::currency::format_currency;
use crate::result::CalculationResult;

/// Exit load status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitLoadStatus {
    Applicable,
    NotApplicable,
}

impl ExitLoadStatus {
    #[must_use]
    pub fn from_flag(applicable: bool) -> Self {
        if applicable {
            Self::Applicable
        } else {
            Self::NotApplicable
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applicable => STATUS_APPLICABLE,
            Self::NotApplicable => STATUS_NOT_APPLICABLE,
        }
    }

    /// Hex color for the label.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Applicable => STATUS_APPLICABLE_COLOR,
            Self::NotApplicable => STATUS_NOT_APPLICABLE_COLOR,
        }
    }
}

/// Formatted text for every display slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySlots {
    pub net_redemption: String,
    pub current_value: String,
    pub exit_load_charge: String,
    pub total_gain_loss: String,
    pub investment_amount: String,
    pub gains_earned: String,
}

impl DisplaySlots {
    #[must_use]
    pub fn from_result(r: &CalculationResult) -> Self {
        Self {
            net_redemption: format_currency(r.net_redemption_amount),
            current_value: format_currency(r.current_value),
            exit_load_charge: format_currency(r.exit_load_charge),
            total_gain_loss: format_currency(r.total_gain_loss),
            investment_amount: format_currency(r.investment_amount),
            gains_earned: format_currency(r.gains_earned),
        }
    }
}

/// One slice of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
}

/// Proportion ("donut") chart of investment, gains and exit load.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    pub slices: [Slice; 3],
    /// Formatted net redemption amount drawn in the center.
    pub center_text: String,
    pub caption: &'static str,
}

impl ProportionChart {
    #[must_use]
    pub fn from_result(r: &CalculationResult) -> Self {
        Self {
            slices: [
                Slice {
                    label: "Investment Amount",
                    value: r.investment_amount,
                },
                Slice {
                    label: "Gains Earned",
                    value: r.gains_earned,
                },
                Slice {
                    label: "Exit Load Charge",
                    value: r.exit_load_charge.abs(),
                },
            ],
            center_text: format_currency(r.net_redemption_amount),
            caption: CENTER_CAPTION,
        }
    }

    /// Share of each slice in `[0, 1]`; all zero when the total is not positive.
    #[must_use]
    pub fn shares(&self) -> [f64; 3] {
        let total: f64 = self.slices.iter().map(|s| s.value.max(0.0)).sum();
        if total <= 0.0 {
            return [0.0; 3];
        }
        let mut shares = [0.0; 3];
        for (share, slice) in shares.iter_mut().zip(&self.slices) {
            *share = slice.value.max(0.0) / total;
        }
        shares
    }

    /// Tooltip text for slice `index`, e.g. `Gains Earned: ₹20,000`.
    #[must_use]
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.slices
            .get(index)
            .map(|s| format!("{}: {}", s.label, format_currency(s.value)))
    }
}

/// Line chart comparing candidate redemption amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    /// Formatted x-axis labels, one per point.
    pub labels: Vec<String>,
    pub points: Vec<ComparisonPoint>,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl ComparisonChart {
    #[must_use]
    pub fn from_result(r: &CalculationResult) -> Self {
        let points = comparison_series(r);
        Self {
            labels: points
                .iter()
                .map(|p| format_currency(p.redemption_amount))
                .collect(),
            points,
            x_title: "Redemption Amount",
            y_title: "Amount (\u{20B9})",
        }
    }

    /// Y-axis tick label.
    #[must_use]
    pub fn y_tick(value: f64) -> String {
        format_currency(value)
    }

    /// Largest y value across both series.
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.net_amount.max(p.exit_load_charge))
            .fold(0.0, f64::max)
    }
}

/// Holder for one chart with explicit replacement.
#[derive(Debug)]
pub struct ChartSlot<C> {
    name: &'static str,
    chart: Option<C>,
    disposed: u64,
}

impl<C> ChartSlot<C> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            chart: None,
            disposed: 0,
        }
    }

    /// Dispose the current chart, then build and install a new one.
    pub fn replace(&mut self, build: impl FnOnce() -> C) -> &C {
        if let Some(old) = self.chart.take() {
            drop(old);
            self.disposed += 1;
            debug!(chart = self.name, disposed = self.disposed, "disposed previous chart");
        }
        self.chart.insert(build())
    }

    #[must_use]
    pub fn get(&self) -> Option<&C> {
        self.chart.as_ref()
    }

    /// Number of charts disposed by `replace`.
    #[must_use]
    pub fn disposed(&self) -> u64 {
        self.disposed
    }
}

/// Everything drawn for the latest applied result.
#[derive(Debug)]
pub struct ResultsView {
    pub slots: DisplaySlots,
    pub status: Option<ExitLoadStatus>,
    pub proportion: ChartSlot<ProportionChart>,
    pub comparison: ChartSlot<ComparisonChart>,
    pub breakdown: Vec<BreakdownRow>,
    /// Result currently shown.
    pub result: Option<CalculationResult>,
}

impl ResultsView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: DisplaySlots::default(),
            status: None,
            proportion: ChartSlot::new("proportion"),
            comparison: ChartSlot::new("comparison"),
            breakdown: Vec::new(),
            result: None,
        }
    }

    /// Redraw every part of the view from `result`.
    pub fn apply(&mut self, result: &CalculationResult) {
        self.slots = DisplaySlots::from_result(result);
        self.status = Some(ExitLoadStatus::from_flag(result.exit_load_applicable));
        self.proportion
            .replace(|| ProportionChart::from_result(result));
        self.comparison
            .replace(|| ComparisonChart::from_result(result));
        self.breakdown = breakdown_rows(result);
        self.result = Some(result.clone());
    }

    /// Whether any result has been applied.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}
