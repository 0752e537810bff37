//! Bound numeric fields: a text input and a range slider sharing one value.

use std::fmt;

/// The six calculator inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    InvestmentAmount,
    ExitLoadRate,
    RedemptionAmount,
    ExitLoadPeriod,
    PurchaseNav,
    CurrentNav,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 6] = [
        FieldId::InvestmentAmount,
        FieldId::ExitLoadRate,
        FieldId::RedemptionAmount,
        FieldId::ExitLoadPeriod,
        FieldId::PurchaseNav,
        FieldId::CurrentNav,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InvestmentAmount => "Investment Amount",
            Self::ExitLoadRate => "Exit Load Rate (%)",
            Self::RedemptionAmount => "Redemption Amount",
            Self::ExitLoadPeriod => "Exit Load Period (years)",
            Self::PurchaseNav => "Purchase NAV",
            Self::CurrentNav => "Current NAV",
        }
    }

    /// Request member this field is sent as.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::InvestmentAmount => "investment_amount",
            Self::ExitLoadRate => "exit_load_rate",
            Self::RedemptionAmount => "redemption_amount",
            Self::ExitLoadPeriod => "exit_load_period",
            Self::PurchaseNav => "purchase_nav",
            Self::CurrentNav => "current_nav",
        }
    }

    /// Field initialized with its startup default and slider bounds.
    #[must_use]
    pub fn default_field(self) -> BoundField {
        match self {
            Self::InvestmentAmount => {
                BoundField::new(100_000.0, 1_000.0, 10_000_000.0, Some(1_000.0))
            }
            Self::ExitLoadRate => BoundField::new(1.0, 0.0, 5.0, Some(0.1)),
            Self::RedemptionAmount => {
                BoundField::new(120_000.0, 1_000.0, 10_000_000.0, Some(1_000.0))
            }
            Self::ExitLoadPeriod => BoundField::new(1.0, 0.0, 5.0, Some(0.5)),
            Self::PurchaseNav => BoundField::new(10.0, 1.0, 1_000.0, Some(0.01)),
            Self::CurrentNav => BoundField::new(12.0, 1.0, 1_000.0, Some(0.01)),
        }
    }

    /// Position in display order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::InvestmentAmount => 0,
            Self::ExitLoadRate => 1,
            Self::RedemptionAmount => 2,
            Self::ExitLoadPeriod => 3,
            Self::PurchaseNav => 4,
            Self::CurrentNav => 5,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Slider bounds and current value of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundField {
    /// Current logical value.
    pub value: f64,
    /// Lower slider bound.
    pub min: f64,
    /// Upper slider bound.
    pub max: f64,
    /// Slider step; `None` means the slider accepts any value.
    pub step: Option<f64>,
}

impl BoundField {
    /// Create a field. `value` is taken as given; it is clamped only when a
    /// commit passes through the sync state machine.
    #[must_use]
    pub fn new(value: f64, min: f64, max: f64, step: Option<f64>) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    /// Whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Snap an in-range value onto the slider's step grid.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        match self.step {
            Some(step) if step > 0.0 => {
                let steps = ((value - self.min) / step).round();
                // Strip representation noise such as 0.30000000000000004.
                let snapped = round_to_step_precision(self.min + steps * step, step);
                self.clamp(snapped)
            }
            _ => value,
        }
    }

    /// Slider fill percentage for `value`, in `[0, 100]` for in-range values.
    ///
    /// A degenerate range yields 0.
    #[must_use]
    pub fn fill_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - self.min) / span * 100.0
    }
}

#[allow(clippy::cast_possible_wrap)]
fn round_to_step_precision(value: f64, step: f64) -> f64 {
    let mut decimals = 0u32;
    let mut scaled = step;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Render a value the way the text field shows it.
#[must_use]
pub fn display_value(value: f64) -> String {
    format!("{value}")
}
