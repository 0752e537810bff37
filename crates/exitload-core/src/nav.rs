//! Dropdown navigation menu and active-link marking.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::events::{EventBus, Propagation};

/// Where a click landed relative to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The button that opens and closes the menu.
    ToggleButton,
    /// A navigation link inside the menu content, with its target path.
    Link(String),
    /// The menu content region, outside any link.
    Content,
    /// Inside the menu subtree but outside the content region.
    MenuFrame,
    /// Anywhere outside the menu.
    Outside,
}

/// Key presses relevant to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Other,
}

/// Events the menu reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Click(ClickTarget),
    KeyDown(NavKey),
}

/// Open/closed state of the dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Apply one event, returning whether it propagates further.
    pub fn handle(&mut self, event: &NavEvent) -> Propagation {
        match event {
            NavEvent::Click(ClickTarget::ToggleButton) => {
                self.open = !self.open;
                debug!(open = self.open, "dropdown toggled");
                Propagation::Stop
            }
            NavEvent::Click(ClickTarget::Link(path)) => {
                debug!(%path, "menu link followed");
                self.open = false;
                Propagation::Stop
            }
            NavEvent::Click(ClickTarget::Content) => Propagation::Stop,
            NavEvent::Click(ClickTarget::MenuFrame) | NavEvent::KeyDown(NavKey::Other) => {
                Propagation::Continue
            }
            NavEvent::Click(ClickTarget::Outside) | NavEvent::KeyDown(NavKey::Escape) => {
                self.open = false;
                Propagation::Continue
            }
        }
    }
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

impl NavLink {
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            active: false,
        }
    }
}

/// Mark the first link whose path equals `current_path` as active and clear
/// every other link. Returns the index of the active link, if any.
pub fn mark_active(links: &mut [NavLink], current_path: &str) -> Option<usize> {
    let mut active = None;
    for (i, link) in links.iter_mut().enumerate() {
        link.active = active.is_none() && link.path == current_path;
        if link.active {
            active = Some(i);
        }
    }
    active
}

/// Result of [`NavDropdown::setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Listener registered.
    Wired,
    /// A previous call already registered the listener; nothing was added.
    AlreadyInitialized,
    /// The menu has no links, so there is nothing to open.
    MissingMenu,
}

/// The dropdown menu widget.
#[derive(Debug)]
pub struct NavDropdown {
    state: Rc<RefCell<MenuState>>,
    links: Vec<NavLink>,
    initialized: bool,
}

impl NavDropdown {
    /// Create a closed, unwired menu.
    #[must_use]
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MenuState::default())),
            links,
            initialized: false,
        }
    }

    /// Register the menu's listener on `bus`, at most once per instance.
    pub fn setup(&mut self, bus: &mut EventBus<NavEvent>) -> SetupOutcome {
        if self.links.is_empty() {
            warn!("navigation menu has no links; dropdown not wired");
            return SetupOutcome::MissingMenu;
        }
        if self.initialized {
            debug!("navigation menu already initialized");
            return SetupOutcome::AlreadyInitialized;
        }
        self.initialized = true;

        let state = Rc::clone(&self.state);
        bus.subscribe(move |event| state.borrow_mut().handle(event));
        info!(links = self.links.len(), "navigation menu initialized");
        SetupOutcome::Wired
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    /// Whether `setup` has wired the listener.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Menu links in display order.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Index of the active link, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    /// Mark the link matching `current_path` active. See [`mark_active`].
    pub fn set_active_link(&mut self, current_path: &str) -> Option<usize> {
        mark_active(&mut self.links, current_path)
    }
}
