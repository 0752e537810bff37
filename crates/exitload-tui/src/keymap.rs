//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Move focus to the next field, committing pending text.
    FocusNext,
    /// Move focus to the previous field, committing pending text.
    FocusPrev,
    /// Move the focused slider one step down.
    SlideDown,
    /// Move the focused slider one step up.
    SlideUp,
    /// Type a character into the focused field.
    Input(char),
    Backspace,
    /// Commit the focused field's text.
    Commit,
    ToggleMenu,
    Escape,
    ToggleDetails,
    ToggleLogs,
    PageUp,
    PageDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c @ ('0'..='9' | '.' | '-' | 'e' | 'E')) => KeyAction::Input(c),
        KeyCode::Char('m') => KeyAction::ToggleMenu,
        KeyCode::Char('d') => KeyAction::ToggleDetails,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
        KeyCode::Left => KeyAction::SlideDown,
        KeyCode::Right => KeyAction::SlideUp,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Commit,
        KeyCode::Esc => KeyAction::Escape,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyAction {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn escape_is_not_quit() {
        assert_eq!(key(KeyCode::Esc), KeyAction::Escape);
    }

    #[test]
    fn numeric_characters_are_input() {
        for c in ['0', '7', '9', '.', '-', 'e'] {
            assert_eq!(key(KeyCode::Char(c)), KeyAction::Input(c));
        }
        assert_eq!(key(KeyCode::Backspace), KeyAction::Backspace);
        assert_eq!(key(KeyCode::Enter), KeyAction::Commit);
    }

    #[test]
    fn focus_keys() {
        assert_eq!(key(KeyCode::Tab), KeyAction::FocusNext);
        assert_eq!(key(KeyCode::Down), KeyAction::FocusNext);
        assert_eq!(key(KeyCode::BackTab), KeyAction::FocusPrev);
        assert_eq!(key(KeyCode::Up), KeyAction::FocusPrev);
    }

    #[test]
    fn slider_keys() {
        assert_eq!(key(KeyCode::Left), KeyAction::SlideDown);
        assert_eq!(key(KeyCode::Right), KeyAction::SlideUp);
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(key(KeyCode::Char('m')), KeyAction::ToggleMenu);
        assert_eq!(key(KeyCode::Char('d')), KeyAction::ToggleDetails);
        assert_eq!(key(KeyCode::Char('l')), KeyAction::ToggleLogs);
    }

    #[test]
    fn page_keys() {
        assert_eq!(key(KeyCode::PageUp), KeyAction::PageUp);
        assert_eq!(key(KeyCode::PageDown), KeyAction::PageDown);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(key(KeyCode::Char('z')), KeyAction::None);
    }
}
