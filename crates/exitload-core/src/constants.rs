//! Constants for formatting, request scaling, and chart construction.

/// Currency symbol prefixed to every formatted amount (Indian rupee).
pub const CURRENCY_SYMBOL: char = '\u{20B9}';

/// Days per year used to convert the exit load period before transmission.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Path of the calculation endpoint, appended to the configured base URL.
pub const CALCULATE_PATH: &str = "/calculate-exit-load";

/// Fallback current value for the comparison chart when the result has none.
pub const FALLBACK_CURRENT_VALUE: f64 = 100_000.0;

/// Floor for the largest candidate redemption amount in the comparison chart.
pub const COMPARISON_FLOOR: f64 = 1_000_000.0;

/// Multipliers of the current value for the first nine comparison candidates.
///
/// The tenth candidate is `max(3 * current_value, COMPARISON_FLOOR)`.
pub const COMPARISON_MULTIPLIERS: [f64; 9] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Multiplier for the last comparison candidate before the floor is applied.
pub const COMPARISON_LAST_MULTIPLIER: f64 = 3.0;

/// Status label when an exit load is charged.
pub const STATUS_APPLICABLE: &str = "Applicable";

/// Status label when no exit load is charged.
pub const STATUS_NOT_APPLICABLE: &str = "Not Applicable";

/// Color of the status label when an exit load is charged.
pub const STATUS_APPLICABLE_COLOR: &str = "#e53e3e";

/// Color of the status label when no exit load is charged.
pub const STATUS_NOT_APPLICABLE_COLOR: &str = "#38a169";

/// Caption drawn under the proportion chart center text.
pub const CENTER_CAPTION: &str = "Net Amount";

/// Exit codes for the command-line host.
pub mod exit_codes {
    /// Generic error (service unreachable, malformed response, I/O).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid input: the request was suppressed.
    pub const ERROR_INPUT: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
