//! TUI header panel and navigation dropdown.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use exitload_core::nav::{ClickTarget, NavLink};

use crate::styles::ColorTheme;

const TOGGLE_CLOSED: &str = "[ Menu \u{25be} ]";
const TOGGLE_OPEN: &str = "[ Menu \u{25b4} ]";
const TOGGLE_WIDTH: u16 = 10;
const MENU_MIN_WIDTH: u16 = 24;

/// Clickable area of the menu toggle inside the header.
#[must_use]
pub fn toggle_area(header: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(header.width);
    Rect::new(header.x + header.width - width, header.y, width, 1)
}

/// Area of the open dropdown, right-aligned below the header and clipped to
/// `bounds`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn menu_area(header: Rect, bounds: Rect, links: &[NavLink]) -> Rect {
    let widest = links
        .iter()
        .map(|l| l.label.chars().count() + l.path.chars().count() + 6)
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let width = widest.max(MENU_MIN_WIDTH).min(bounds.width);
    let height = (links.len().min(u16::MAX as usize - 2) as u16 + 2).min(
        bounds
            .height
            .saturating_sub(header.y + header.height - bounds.y),
    );
    Rect::new(
        header.x + header.width.saturating_sub(width),
        header.y + header.height,
        width,
        height,
    )
}

/// Classify a click at (`column`, `row`) relative to the menu.
///
/// `menu` is `None` while the dropdown is closed.
#[must_use]
pub fn hit_test(
    header: Rect,
    menu: Option<Rect>,
    links: &[NavLink],
    column: u16,
    row: u16,
) -> ClickTarget {
    if contains(toggle_area(header), column, row) {
        return ClickTarget::ToggleButton;
    }
    let Some(menu) = menu else {
        return ClickTarget::Outside;
    };
    if !contains(menu, column, row) {
        return ClickTarget::Outside;
    }
    let inner = Block::default().borders(Borders::ALL).inner(menu);
    if !contains(inner, column, row) {
        return ClickTarget::MenuFrame;
    }
    match links.get(usize::from(row - inner.y)) {
        Some(link) => ClickTarget::Link(link.path.clone()),
        None => ClickTarget::Content,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, menu_open: bool, current_path: &str) {
    let theme = ColorTheme::default();
    let title = Line::from(vec![
        Span::styled("ExitLoad-rs", theme.header_style()),
        Span::raw(" | Exit Load Calculator"),
        Span::styled(format!("  {current_path}"), theme.muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(title).block(block), area);

    let toggle = if menu_open { TOGGLE_OPEN } else { TOGGLE_CLOSED };
    frame.render_widget(
        Paragraph::new(toggle)
            .style(theme.focus_style())
            .alignment(Alignment::Right),
        toggle_area(area),
    );
}

/// Render the open dropdown over whatever is below it.
pub fn render_menu(frame: &mut Frame, area: Rect, links: &[NavLink]) {
    let theme = ColorTheme::default();
    let items: Vec<ListItem> = links
        .iter()
        .map(|link| {
            let (marker, style) = if link.active {
                ("\u{25b8} ", theme.focus_style().add_modifier(Modifier::UNDERLINED))
            } else {
                ("  ", theme.text_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", link.label), style),
                Span::styled(format!("  {}", link.path), theme.muted_style()),
            ]))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Navigate ")
                .border_style(Style::default().fg(theme.primary)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn links() -> Vec<NavLink> {
        let mut links = vec![
            NavLink::new("Home", "/"),
            NavLink::new("About", "/about"),
            NavLink::new("Contact", "/contact"),
        ];
        links[1].active = true;
        links
    }

    fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn toggle_sits_at_right_edge() {
        let header = Rect::new(0, 0, 80, 3);
        let toggle = toggle_area(header);
        assert_eq!(toggle.x + toggle.width, 80);
        assert_eq!(toggle.y, 0);
    }

    #[test]
    fn menu_below_header() {
        let header = Rect::new(0, 0, 80, 3);
        let menu = menu_area(header, Rect::new(0, 0, 80, 24), &links());
        assert_eq!(menu.y, 3);
        assert_eq!(menu.height, 5);
        assert_eq!(menu.x + menu.width, 80);
    }

    #[test]
    fn hit_test_regions() {
        let header = Rect::new(0, 0, 80, 3);
        let links = links();
        let menu = menu_area(header, Rect::new(0, 0, 80, 24), &links);
        let toggle = toggle_area(header);

        assert_eq!(
            hit_test(header, None, &links, toggle.x, toggle.y),
            ClickTarget::ToggleButton
        );
        assert_eq!(hit_test(header, None, &links, 5, 10), ClickTarget::Outside);
        assert_eq!(
            hit_test(header, Some(menu), &links, menu.x + 2, menu.y + 2),
            ClickTarget::Link("/about".into())
        );
        assert_eq!(
            hit_test(header, Some(menu), &links, menu.x, menu.y + 1),
            ClickTarget::MenuFrame
        );
        assert_eq!(hit_test(header, Some(menu), &links, 0, 20), ClickTarget::Outside);
    }

    #[test]
    fn hit_test_blank_menu_row_is_content() {
        let header = Rect::new(0, 0, 80, 3);
        let links = links();
        let menu = Rect::new(50, 3, 30, 8);
        assert_eq!(
            hit_test(header, Some(menu), &links, 55, 8),
            ClickTarget::Content
        );
    }

    #[test]
    fn render_header_shows_toggle() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| render_header(frame, frame.area(), false, "/exit-load-calculator"))
            .unwrap();
        let top = row_text(buf.buffer, 0);
        assert!(top.contains("Exit Load Calculator"));
        assert!(top.contains("Menu"));
    }

    #[test]
    fn render_menu_lists_links() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| render_menu(frame, frame.area(), &links()))
            .unwrap();
        assert!(row_text(buf.buffer, 1).contains("Home"));
        assert!(row_text(buf.buffer, 2).contains("\u{25b8} About"));
        assert!(row_text(buf.buffer, 3).contains("/contact"));
    }
}
