//! # exitload-tui
//!
//! Interactive exit load dashboard using ratatui with Elm architecture.

pub mod bridge;
pub mod chart;
pub mod fields;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;
pub mod summary;
pub mod table;

pub use bridge::TuiResultsPresenter;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
