//! Error handling and exit codes.

use std::time::Duration;

use exitload_core::constants::exit_codes;
use exitload_core::request::RequestError;
use exitload_orchestration::error::ServiceError;

/// Failures of a one-shot calculation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was suppressed because an input was negative.
    #[error("request not sent: {0}")]
    Input(#[from] RequestError),
    /// The service call failed. Already shown to the user by the presenter.
    #[error("calculation failed: {0}")]
    Service(#[from] ServiceError),
    /// No response arrived in time.
    #[error("no response within {0:?}")]
    NoResponse(Duration),
    /// Interrupted by Ctrl+C.
    #[error("interrupted")]
    Cancelled,
}

/// Exit code for an application error.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Input(_)) => exit_codes::ERROR_INPUT,
        Some(AppError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(AppError::Service(_) | AppError::NoResponse(_)) | None => exit_codes::ERROR_GENERIC,
    }
}

/// Whether the error was already printed when it happened.
pub fn already_reported(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<AppError>(), Some(AppError::Service(_)))
}
