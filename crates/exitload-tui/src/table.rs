//! Breakdown table widget.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use exitload_core::breakdown::BreakdownRow;

use crate::styles::ColorTheme;

/// Render the breakdown rows as a three-column table.
pub fn render_breakdown(frame: &mut Frame, area: Rect, rows: &[BreakdownRow]) {
    let theme = ColorTheme::default();
    let header = Row::new(["Parameter", "Value", "Description"])
        .style(theme.header_style().add_modifier(Modifier::UNDERLINED));

    let body = rows.iter().map(|row| {
        Row::new([
            Cell::from(row.parameter),
            Cell::from(row.value.clone()).style(theme.text_style()),
            Cell::from(row.description).style(theme.muted_style()),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Breakdown ")
            .border_style(theme.border_style()),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use exitload_core::breakdown::breakdown_rows;
    use exitload_core::CalculationResult;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_header_and_rows() {
        let rows = breakdown_rows(&CalculationResult {
            investment_amount: 100_000.0,
            exit_load_applicable: true,
            ..CalculationResult::default()
        });
        let backend = TestBackend::new(90, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| render_breakdown(frame, frame.area(), &rows))
            .unwrap()
            .buffer
            .clone();

        let line = |y: u16| -> String {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(line(1).contains("Parameter"));
        assert!(line(2).contains("Investment Amount"));
        assert!(line(2).contains("₹1,00,000"));
        assert!(line(11).contains("Exit Load Applicable"));
        assert!(line(11).contains("Yes"));
    }

    #[test]
    fn empty_rows_do_not_panic() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_breakdown(frame, frame.area(), &[]))
            .unwrap();
    }
}
