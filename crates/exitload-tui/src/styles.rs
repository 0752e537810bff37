//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use exitload_core::view::ExitLoadStatus;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    /// Net amount series and investment slice.
    pub net: Color,
    /// Gains slice.
    pub gains: Color,
    /// Exit load series and slice.
    pub load: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            net: Color::Rgb(0x31, 0x82, 0xce),
            gains: Color::Rgb(0x38, 0xa1, 0x69),
            load: Color::Rgb(0xe5, 0x3e, 0x3e),
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for the focused field.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get the style for the exit load status label.
    #[must_use]
    pub fn status_style(&self, status: ExitLoadStatus) -> Style {
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD)
    }
}

/// Terminal color for a status, parsed from its hex color.
#[must_use]
pub fn status_color(status: ExitLoadStatus) -> Color {
    status.color().parse().unwrap_or(match status {
        ExitLoadStatus::Applicable => Color::Red,
        ExitLoadStatus::NotApplicable => Color::Green,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_are_hex() {
        assert_eq!(
            status_color(ExitLoadStatus::Applicable),
            Color::Rgb(0xe5, 0x3e, 0x3e)
        );
        assert_eq!(
            status_color(ExitLoadStatus::NotApplicable),
            Color::Rgb(0x38, 0xa1, 0x69)
        );
    }

    #[test]
    fn status_style_is_bold() {
        let theme = ColorTheme::default();
        let style = theme.status_style(ExitLoadStatus::Applicable);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
