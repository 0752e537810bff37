//! TUI application model (Elm architecture).

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, info};

use exitload_core::events::EventBus;
use exitload_core::field::FieldId;
use exitload_core::nav::{ClickTarget, NavDropdown, NavEvent, NavKey, NavLink, SetupOutcome};
use exitload_core::sync::FieldSet;
use exitload_core::view::ResultsView;
use exitload_orchestration::dispatcher::RecalcDispatcher;

use crate::bridge::TuiResultsPresenter;
use crate::chart::{render_comparison, render_proportion};
use crate::fields::{render_fields, slider_hit, PANEL_HEIGHT};
use crate::footer::render_footer;
use crate::header::{hit_test, menu_area, render_header, render_menu};
use crate::keymap::{map_key, KeyAction};
use crate::logs::{push_log, render_logs, LogScrollState};
use crate::messages::TuiMessage;
use crate::summary::render_summary;
use crate::table::render_breakdown;

/// Path of the calculator page itself.
pub const CALCULATOR_PATH: &str = "/exit-load-calculator";

/// Links shown in the navigation dropdown.
#[must_use]
pub fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("SIP Calculator", "/sip-calculator"),
        NavLink::new("Exit Load Calculator", CALCULATOR_PATH),
        NavLink::new("About", "/about"),
        NavLink::new("Contact", "/contact"),
    ]
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub header: Rect,
    pub fields: Rect,
    pub summary: Rect,
    pub proportion: Rect,
    pub comparison: Rect,
    /// Present while details are shown.
    pub breakdown: Option<Rect>,
    /// Present while logs are shown.
    pub logs: Option<Rect>,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The six bound input fields.
    pub fields: FieldSet,
    /// Index of the focused field in display order.
    focus: usize,
    /// Whether the focused field has uncommitted typed text.
    pub editing: bool,
    /// Navigation dropdown.
    pub nav: NavDropdown,
    nav_bus: EventBus<NavEvent>,
    /// Page path used for active-link marking.
    pub current_path: String,
    /// Everything drawn for the latest applied result.
    pub view: ResultsView,
    /// Diagnostics log lines.
    pub logs: Vec<String>,
    /// Diagnostics scroll position.
    pub log_scroll: LogScrollState,
    /// Show the breakdown table.
    pub show_details: bool,
    /// Show the diagnostics panel.
    pub show_logs: bool,
    /// Service error messages.
    pub errors: Vec<String>,
    /// Whether a fresher result is still expected.
    pub pending: bool,
    /// Sequence number of the last request sent.
    pub last_request: Option<u64>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Set by the field change hook, cleared when a request is sent.
    changed: Rc<Cell<bool>>,
    dispatcher: Option<RecalcDispatcher>,
    presenter: TuiResultsPresenter,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app. `tx` must feed `rx`; dispatcher outcomes are
    /// forwarded through it.
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>, rx: Receiver<TuiMessage>) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        let fields = FieldSet::with_defaults(move |_| flag.set(true));

        Self {
            should_quit: false,
            fields,
            focus: 0,
            editing: false,
            nav: NavDropdown::new(site_links()),
            nav_bus: EventBus::new(),
            current_path: CALCULATOR_PATH.to_string(),
            view: ResultsView::new(),
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_details: true,
            show_logs: true,
            errors: Vec::new(),
            pending: false,
            last_request: None,
            terminal_width: 80,
            terminal_height: 24,
            changed,
            dispatcher: None,
            presenter: TuiResultsPresenter::new(tx),
            rx,
        }
    }

    /// Send recalculations through `dispatcher`.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: RecalcDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Set the page path used for active-link marking.
    #[must_use]
    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into();
        self
    }

    /// Wire the menu, mark the active link, sync every field to its default,
    /// and request the first calculation.
    pub fn start(&mut self) {
        if self.nav.setup(&mut self.nav_bus) == SetupOutcome::MissingMenu {
            self.log("[WARN] navigation menu not found".to_string());
        }
        if self.nav.set_active_link(&self.current_path).is_none() {
            debug!(path = %self.current_path, "no navigation link matches current path");
        }
        self.fields.initial_sync();
        self.recalculate();
    }

    /// The focused field.
    #[must_use]
    pub fn focused(&self) -> FieldId {
        FieldId::ALL[self.focus]
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.drain(&self.presenter);
        }
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Result(result) => {
                self.view.apply(&result);
                self.pending = self.dispatcher.as_ref().is_some_and(|d| !d.is_settled());
            }
            TuiMessage::ServiceError(err) => {
                self.pending = self.dispatcher.as_ref().is_some_and(|d| !d.is_settled());
                self.log(format!("[ERROR] calculation failed: {err}"));
                self.errors.push(err);
            }
            TuiMessage::Log(line) => {
                self.log(line);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Click { column, row } => {
                self.handle_click(column, row);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::FocusNext => {
                self.move_focus(1);
            }
            KeyAction::FocusPrev => {
                self.move_focus(FieldId::ALL.len() - 1);
            }
            KeyAction::SlideDown => {
                self.step_slider(-1.0);
            }
            KeyAction::SlideUp => {
                self.step_slider(1.0);
            }
            KeyAction::Input(c) => {
                let mut text = if self.editing {
                    self.focused_text()
                } else {
                    String::new()
                };
                text.push(c);
                self.type_focused(text);
            }
            KeyAction::Backspace => {
                let mut text = self.focused_text();
                text.pop();
                self.type_focused(text);
            }
            KeyAction::Commit => {
                self.commit_focused();
            }
            KeyAction::ToggleMenu => {
                self.dispatch_nav(NavEvent::Click(ClickTarget::ToggleButton));
            }
            KeyAction::Escape => {
                self.dispatch_nav(NavEvent::KeyDown(NavKey::Escape));
            }
            KeyAction::ToggleDetails => {
                self.show_details = !self.show_details;
            }
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::PageUp => {
                self.log_scroll.page_up(10);
            }
            KeyAction::PageDown => {
                self.log_scroll.page_down(10, self.logs.len());
            }
            KeyAction::None => {}
        }
        self.flush_changes();
    }

    /// Handle a left click at a terminal cell.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let bounds = self.area();
        let panels = Self::compute_layout(bounds, self.show_details, self.show_logs);
        let menu = self
            .nav
            .is_open()
            .then(|| menu_area(panels.header, bounds, self.nav.links()));

        let target = hit_test(panels.header, menu, self.nav.links(), column, row);
        let reaches_page = target == ClickTarget::Outside;
        self.dispatch_nav(NavEvent::Click(target));

        if reaches_page {
            if let Some((id, ratio)) = slider_hit(panels.fields, column, row) {
                self.commit_focused();
                self.focus = id.index();
                let sync = self.fields.get_mut(id);
                let field = *sync.field();
                sync.slide_to(field.min + ratio * (field.max - field.min));
            }
        }
        self.flush_changes();
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    fn focused_text(&self) -> String {
        self.fields.get(self.focused()).surface().text.clone()
    }

    fn type_focused(&mut self, text: String) {
        self.editing = true;
        let id = self.focused();
        self.fields.get_mut(id).type_text(text);
    }

    /// Commit typed text in the focused field, as a blur or Enter would.
    fn commit_focused(&mut self) {
        if !self.editing {
            return;
        }
        self.editing = false;
        let text = self.focused_text();
        let id = self.focused();
        self.fields.get_mut(id).commit_text(text);
    }

    fn move_focus(&mut self, delta: usize) {
        self.commit_focused();
        self.focus = (self.focus + delta) % FieldId::ALL.len();
    }

    fn step_slider(&mut self, direction: f64) {
        self.commit_focused();
        let sync = self.fields.get_mut(FieldId::ALL[self.focus]);
        let field = *sync.field();
        let step = field.step.unwrap_or((field.max - field.min) / 100.0);
        let target = sync.surface().slider + direction * step;
        sync.slide_to(target);
    }

    fn dispatch_nav(&mut self, event: NavEvent) {
        self.nav_bus.dispatch(&event);
        if let NavEvent::Click(ClickTarget::Link(path)) = event {
            info!(%path, "navigation link followed");
            self.nav.set_active_link(&path);
            self.log(format!("navigated to {path}"));
            self.current_path = path;
        }
    }

    fn flush_changes(&mut self) {
        if self.changed.get() {
            self.recalculate();
        }
    }

    /// Send a request built from the current field text.
    fn recalculate(&mut self) {
        self.changed.set(false);
        let Some(dispatcher) = &self.dispatcher else {
            return;
        };
        if let Ok(seq) = dispatcher.submit(&self.fields.values()) {
            self.last_request = Some(seq);
            self.pending = true;
        }
    }

    fn log(&mut self, line: String) {
        push_log(&mut self.logs, &mut self.log_scroll, line);
    }

    /// Compute the panel layout.
    ///
    /// Inputs and summary on the left, charts and breakdown on the right,
    /// diagnostics across the bottom.
    #[must_use]
    pub fn compute_layout(area: Rect, show_details: bool, show_logs: bool) -> Panels {
        let mut rows = vec![
            Constraint::Length(3), // header
            Constraint::Min(10),   // main content
        ];
        if show_logs {
            rows.push(Constraint::Length(7));
        }
        rows.push(Constraint::Length(2)); // footer

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints(rows)
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(PANEL_HEIGHT), Constraint::Min(3)])
            .split(main[0]);

        let mut right_rows = vec![Constraint::Length(5), Constraint::Min(8)];
        if show_details {
            right_rows.push(Constraint::Length(15));
        }
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints(right_rows)
            .split(main[1]);

        Panels {
            header: outer[0],
            fields: left[0],
            summary: left[1],
            proportion: right[0],
            comparison: right[1],
            breakdown: show_details.then(|| right[2]),
            logs: show_logs.then(|| outer[2]),
            footer: outer[outer.len() - 1],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let panels = Self::compute_layout(area, self.show_details, self.show_logs);

        render_header(frame, panels.header, self.nav.is_open(), &self.current_path);
        render_fields(
            frame,
            panels.fields,
            &self.fields,
            self.focused(),
            self.editing,
        );
        render_summary(frame, panels.summary, &self.view, self.pending);
        render_proportion(frame, panels.proportion, self.view.proportion.get());
        render_comparison(frame, panels.comparison, self.view.comparison.get());
        if let Some(breakdown) = panels.breakdown {
            render_breakdown(frame, breakdown, &self.view.breakdown);
        }
        if let Some(logs) = panels.logs {
            render_logs(frame, logs, &self.logs, self.log_scroll.offset);
        }
        render_footer(frame, panels.footer);

        // Drawn last so it overlays the panels below the header.
        if self.nav.is_open() {
            let menu = menu_area(panels.header, area, self.nav.links());
            render_menu(frame, menu, self.nav.links());
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Mouse(mouse)
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                    {
                        self.handle_click(mouse.column, mouse.row);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            // Apply any responses that arrived
            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
