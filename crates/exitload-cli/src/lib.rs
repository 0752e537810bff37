//! # exitload-cli
//!
//! CLI output, request spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::{CliResultsPresenter, OutputMode};
