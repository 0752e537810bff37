//! Results summary panel: display slots and exit load status.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use exitload_core::view::ResultsView;

use crate::styles::ColorTheme;

/// Render the formatted display slots and the status label.
pub fn render_summary(frame: &mut Frame, area: Rect, view: &ResultsView, pending: bool) {
    let theme = ColorTheme::default();
    let title = if pending { " Results (updating) " } else { " Results " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style());

    if !view.has_result() {
        frame.render_widget(
            Paragraph::new("Waiting for calculation...")
                .style(theme.muted_style())
                .block(block),
            area,
        );
        return;
    }

    let slots = &view.slots;
    let mut lines: Vec<Line> = [
        ("Net Redemption", &slots.net_redemption),
        ("Current Value", &slots.current_value),
        ("Exit Load Charge", &slots.exit_load_charge),
        ("Total Gain/Loss", &slots.total_gain_loss),
        ("Investment", &slots.investment_amount),
        ("Gains Earned", &slots.gains_earned),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label:<18}"), theme.muted_style()),
            Span::styled(value.clone(), theme.text_style()),
        ])
    })
    .collect();

    if let Some(status) = view.status {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", "Exit Load"), theme.muted_style()),
            Span::styled(status.label(), theme.status_style(status)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
