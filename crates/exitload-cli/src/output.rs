//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use exitload_core::currency::format_currency;
use exitload_core::view::ResultsView;

use crate::ui::{header, status_badge};

/// Human-readable report: summary slots, status, proportion shares, and the
/// breakdown table. `details` adds the comparison series.
#[must_use]
pub fn render_text(view: &ResultsView, details: bool) -> String {
    let mut out = String::new();
    let slots = &view.slots;

    let _ = writeln!(out, "{}", header("Exit Load Summary"));
    for (label, value) in [
        ("Net Redemption Amount", &slots.net_redemption),
        ("Current Value", &slots.current_value),
        ("Exit Load Charge", &slots.exit_load_charge),
        ("Total Gain/Loss", &slots.total_gain_loss),
        ("Investment Amount", &slots.investment_amount),
        ("Gains Earned", &slots.gains_earned),
    ] {
        let _ = writeln!(out, "  {label:<24} {value:>16}");
    }
    if let Some(status) = view.status {
        let _ = writeln!(out, "  {:<24} {}", "Exit Load", status_badge(status));
    }

    if let Some(chart) = view.proportion.get() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            header(&format!("{} {}", chart.caption, chart.center_text))
        );
        for (slice, share) in chart.slices.iter().zip(chart.shares()) {
            let _ = writeln!(
                out,
                "  {:<24} {:>16} {:>6.1}%",
                slice.label,
                format_currency(slice.value),
                share * 100.0
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header("Breakdown"));
    for row in &view.breakdown {
        let _ = writeln!(
            out,
            "  {:<24} {:>16}  {}",
            row.parameter, row.value, row.description
        );
    }

    if details {
        if let Some(chart) = view.comparison.get() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", header("Redemption Comparison"));
            let _ = writeln!(
                out,
                "  {:<20} {:>16} {:>16}",
                chart.x_title, "Net Amount", "Exit Load Charge"
            );
            for (label, point) in chart.labels.iter().zip(&chart.points) {
                let _ = writeln!(
                    out,
                    "  {label:<20} {:>16} {:>16}",
                    format_currency(point.net_amount),
                    format_currency(point.exit_load_charge)
                );
            }
        }
    }

    out
}

/// Quiet output: the net redemption amount alone.
#[must_use]
pub fn render_quiet(view: &ResultsView) -> String {
    format!("{}\n", view.slots.net_redemption)
}

/// Machine-readable report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(view: &ResultsView, details: bool) -> serde_json::Result<String> {
    let slots = &view.slots;
    let mut report = json!({
        "result": view.result,
        "display": {
            "net_redemption_amount": slots.net_redemption,
            "current_value": slots.current_value,
            "exit_load_charge": slots.exit_load_charge,
            "total_gain_loss": slots.total_gain_loss,
            "investment_amount": slots.investment_amount,
            "gains_earned": slots.gains_earned,
        },
        "status": view.status.map(|s| s.label()),
        "breakdown": view.breakdown,
    });

    if details {
        if let Some(chart) = view.comparison.get() {
            let points: Vec<_> = chart
                .points
                .iter()
                .zip(&chart.labels)
                .map(|(p, label)| {
                    json!({
                        "label": label,
                        "redemption_amount": p.redemption_amount,
                        "net_amount": p.net_amount,
                        "exit_load_charge": p.exit_load_charge,
                    })
                })
                .collect();
            report["comparison"] = json!(points);
        }
    }

    serde_json::to_string_pretty(&report)
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
