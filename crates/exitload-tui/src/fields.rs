//! Input panel: one text line and one slider gauge per field.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use exitload_core::field::{display_value, FieldId};
use exitload_core::sync::FieldSet;

use crate::styles::ColorTheme;

/// Rows taken by the input panel, borders included.
#[allow(clippy::cast_possible_truncation)]
pub const PANEL_HEIGHT: u16 = FieldId::ALL.len() as u16 * 2 + 2;

/// Text row and slider row for each field, in display order.
#[must_use]
pub fn field_rows(area: Rect) -> Vec<(Rect, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(FieldId::ALL.map(|_| Constraint::Length(2)))
        .split(inner);
    slots
        .iter()
        .map(|slot| {
            let text = Rect::new(slot.x, slot.y, slot.width, slot.height.min(1));
            let slider = Rect::new(
                slot.x,
                slot.y + 1,
                slot.width,
                slot.height.saturating_sub(1),
            );
            (text, slider)
        })
        .collect()
}

/// The field whose slider was clicked and where along it, in `[0, 1]`.
#[must_use]
pub fn slider_hit(area: Rect, column: u16, row: u16) -> Option<(FieldId, f64)> {
    field_rows(area)
        .into_iter()
        .zip(FieldId::ALL)
        .find_map(|((_, slider), id)| {
            let inside = slider.height > 0
                && row == slider.y
                && column >= slider.x
                && column < slider.x + slider.width;
            inside.then(|| {
                let span = f64::from(slider.width.saturating_sub(1).max(1));
                (id, (f64::from(column - slider.x) / span).clamp(0.0, 1.0))
            })
        })
}

/// Render the six fields.
pub fn render_fields(
    frame: &mut Frame,
    area: Rect,
    fields: &FieldSet,
    focus: FieldId,
    editing: bool,
) {
    let theme = ColorTheme::default();
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inputs ")
            .border_style(theme.border_style()),
        area,
    );

    for (sync, (text_row, slider_row)) in fields.iter().zip(field_rows(area)) {
        let focused = sync.id() == focus;
        let field = sync.field();
        let widgets = sync.surface();

        let label_style = if focused {
            theme.focus_style()
        } else {
            theme.text_style()
        };
        let mut spans = vec![
            Span::styled(format!("{:<26}", sync.id().label()), label_style),
            Span::raw(widgets.text.clone()),
        ];
        if focused && editing {
            spans.push(Span::styled("\u{258f}", theme.focus_style()));
        }
        if !field.contains(sync.request_value()) {
            spans.push(Span::styled("  (out of range)", Style::default().fg(theme.warning)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_row);

        if slider_row.height > 0 {
            let color = if focused { theme.accent } else { theme.primary };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio((widgets.fill / 100.0).clamp(0.0, 1.0))
                .label(format!(
                    "{} [{} .. {}]",
                    display_value(widgets.slider),
                    display_value(field.min),
                    display_value(field.max)
                ));
            frame.render_widget(gauge, slider_row);
        }
    }
}
