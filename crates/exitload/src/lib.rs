//! ExitLoad-rs library: application logic for the exit load calculator.

pub mod app;
pub mod config;
pub mod errors;
