//! Proportion and comparison chart widgets.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};
use ratatui::Frame;

use exitload_core::view::{ComparisonChart, ProportionChart};

use crate::styles::ColorTheme;

fn placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(theme.border_style());
    frame.render_widget(
        Paragraph::new("Waiting for calculation...")
            .style(theme.muted_style())
            .block(block),
        area,
    );
}

/// Render the proportion chart as one share gauge per slice, titled with the
/// center text.
#[allow(clippy::cast_possible_truncation)]
pub fn render_proportion(frame: &mut Frame, area: Rect, chart: Option<&ProportionChart>) {
    let Some(chart) = chart else {
        placeholder(frame, area, "Proportion");
        return;
    };
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {}: {} ", chart.caption, chart.center_text))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(chart.slices.iter().map(|_| Constraint::Length(1)))
        .split(inner);
    let colors = [theme.net, theme.gains, theme.load];

    for (i, share) in chart.shares().into_iter().enumerate() {
        let Some(row) = rows.get(i) else { break };
        let label = chart.tooltip(i).unwrap_or_default();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(colors[i]))
            .ratio(share.clamp(0.0, 1.0))
            .label(format!("{label} ({:.1}%)", share * 100.0));
        frame.render_widget(gauge, *row);
    }
}

/// Render the redemption comparison line chart.
pub fn render_comparison(frame: &mut Frame, area: Rect, chart: Option<&ComparisonChart>) {
    let Some(chart) = chart else {
        placeholder(frame, area, "Redemption Comparison");
        return;
    };
    let theme = ColorTheme::default();

    let net: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|p| (p.redemption_amount, p.net_amount))
        .collect();
    let load: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|p| (p.redemption_amount, p.exit_load_charge))
        .collect();

    let x_max = chart
        .points
        .last()
        .map_or(1.0, |p| p.redemption_amount)
        .max(1.0);
    let y_max = chart.y_max().max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Net Amount")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.net))
            .data(&net),
        Dataset::default()
            .name("Exit Load Charge")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.load))
            .data(&load),
    ];

    let x_labels: Vec<Line> = [
        chart.labels.first(),
        chart.labels.get(chart.labels.len() / 2),
        chart.labels.last(),
    ]
    .into_iter()
    .flatten()
    .map(|l| Line::from(l.clone()))
    .collect();
    let y_labels: Vec<Line> = [0.0, y_max / 2.0, y_max]
        .into_iter()
        .map(|v| Line::from(ComparisonChart::y_tick(v)))
        .collect();

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Redemption Comparison ")
                .border_style(theme.border_style()),
        )
        .x_axis(
            Axis::default()
                .title(chart.x_title)
                .style(theme.muted_style())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_title)
                .style(theme.muted_style())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}
