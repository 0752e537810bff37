//! UI helpers for CLI display.

use console::style;

use exitload_core::view::ExitLoadStatus;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A styled section header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// The exit load status label, red when a load applies and green otherwise.
#[must_use]
pub fn status_badge(status: ExitLoadStatus) -> String {
    if is_color_disabled() {
        return status.label().to_string();
    }
    match status {
        ExitLoadStatus::Applicable => style(status.label()).red().bold().to_string(),
        ExitLoadStatus::NotApplicable => style(status.label()).green().bold().to_string(),
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Results").contains("=== Results ==="));
    }

    #[test]
    fn status_badge_contains_label() {
        assert!(status_badge(ExitLoadStatus::Applicable).contains("Applicable"));
        assert!(status_badge(ExitLoadStatus::NotApplicable).contains("Not Applicable"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }
}
