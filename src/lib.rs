//! Cross-crate integration tests for ExitLoad-rs.
