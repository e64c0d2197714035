//! Error types for meetingbot.
//!
//! Command handling never fails; user mistakes are answered with replies.
//! These errors cover startup and console I/O.

use thiserror::Error;

/// Common error type for meetingbot.
#[derive(Error, Debug)]
pub enum MeetingBotError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration value is not acceptable.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for meetingbot operations.
pub type Result<T> = std::result::Result<T, MeetingBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MeetingBotError::Config("expected `=`".to_string());
        assert_eq!(err.to_string(), "configuration error: expected `=`");
    }

    #[test]
    fn test_validation_error_display() {
        let err = MeetingBotError::Validation("nick must not be empty".to_string());
        assert_eq!(err.to_string(), "validation error: nick must not be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MeetingBotError = io_err.into();
        assert!(matches!(err, MeetingBotError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
