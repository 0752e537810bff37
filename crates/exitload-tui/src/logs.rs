//! Diagnostics log panel with scrolling.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Position of the diagnostics panel. `offset` is the index of the
/// bottom-most visible line; while `follow` is set it tracks the newest line.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    pub offset: usize,
    pub follow: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    /// Move back `lines`, detaching from the newest line.
    pub fn page_up(&mut self, lines: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Move forward `lines`; reaching the last of `total` lines re-attaches.
    pub fn page_down(&mut self, lines: usize, total: usize) {
        let last = total.saturating_sub(1);
        self.offset = (self.offset + lines).min(last);
        self.follow = self.offset == last;
    }
}

/// Maximum number of retained log lines.
pub const LOG_CAPACITY: usize = 500;

/// Append `line` to `logs`, dropping the oldest line beyond
/// [`LOG_CAPACITY`] and keeping `state` pointed at the same lines.
pub fn push_log(logs: &mut Vec<String>, state: &mut LogScrollState, line: String) {
    logs.push(line);
    if logs.len() > LOG_CAPACITY {
        logs.remove(0);
        state.offset = state.offset.saturating_sub(1);
    }
    if state.follow {
        state.offset = logs.len() - 1;
    }
}

/// Render the scrollable diagnostics panel.
///
/// Lines tagged `[ERROR]` are red and `[WARN]` yellow.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = logs.len();
    // Keep the newest lines visible when scrolled to the bottom.
    let first = scroll_offset
        .saturating_add(1)
        .saturating_sub(visible_height)
        .min(total);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(first)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if log.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height {
        let pct = (scroll_offset * 100) / total.saturating_sub(1).max(1);
        format!(" Diagnostics ({pct}%) ")
    } else {
        " Diagnostics ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
