//! Spinner shown while a calculation request is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for the request round trip. Hidden when `visible` is false so
/// quiet and JSON output stay clean.
#[must_use]
pub fn request_spinner(visible: bool, endpoint: &str) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Calculating exit load via {endpoint}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
