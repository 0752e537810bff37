//! Calculation service errors.

/// Failures talking to the calculation endpoint.
///
/// None of these are retried; the caller logs them and keeps its last good
/// state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The client could not be configured.
    #[error("invalid service configuration: {0}")]
    Config(String),

    /// Connect, send, or timeout failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a valid result record.
    #[error("malformed response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ServiceError::Status { status: 502 }.to_string(),
            "endpoint returned HTTP 502"
        );
        assert!(ServiceError::Transport("refused".into())
            .to_string()
            .contains("refused"));
        assert!(ServiceError::Decode("eof".into())
            .to_string()
            .starts_with("malformed response"));
    }
}
