//! TUI message types (Elm Messages).

use exitload_core::result::CalculationResult;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Freshest calculation result, already past the sequence gate.
    Result(Box<CalculationResult>),
    /// A calculation request failed.
    ServiceError(String),
    /// Log message.
    Log(String),
    /// Quit the application.
    Quit,
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Left mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
}
