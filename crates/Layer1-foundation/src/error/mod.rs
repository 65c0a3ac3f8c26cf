//! Error types for the ncclient foundation layer
//!
//! Delivery failures are classified here before the Subject logs them;
//! argument extraction and configuration loading return them directly.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Foundation error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Delivery
    // ========================================================================
    #[error("Listener '{listener}' has no handler for event '{event}'")]
    MissingHandler { listener: String, event: String },

    #[error("Handler '{event}' of listener '{listener}' failed: {message}")]
    HandlerFailed {
        listener: String,
        event: String,
        message: String,
    },

    #[error("Handler '{event}' of listener '{listener}' panicked: {message}")]
    HandlerPanicked {
        listener: String,
        event: String,
        message: String,
    },

    // ========================================================================
    // Event arguments
    // ========================================================================
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    // ========================================================================
    // Config
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // External error conversions
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error came out of a listener during dispatch
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingHandler { .. } | Error::HandlerFailed { .. } | Error::HandlerPanicked { .. }
        )
    }

    pub fn missing_handler(listener: impl Into<String>, event: impl Into<String>) -> Self {
        Error::MissingHandler {
            listener: listener.into(),
            event: event.into(),
        }
    }

    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_failure_classification() {
        assert!(Error::missing_handler("l", "reply").is_delivery_failure());
        assert!(Error::HandlerPanicked {
            listener: "l".into(),
            event: "reply".into(),
            message: "boom".into(),
        }
        .is_delivery_failure());
        assert!(!Error::Config("bad".into()).is_delivery_failure());
        assert!(!Error::MissingArgument("0".into()).is_delivery_failure());
    }

    #[test]
    fn test_display_carries_detail() {
        let err = Error::missing_handler("audit", "undefined");
        assert_eq!(
            err.to_string(),
            "Listener 'audit' has no handler for event 'undefined'"
        );

        let err = Error::invalid_argument("data", "expected a string");
        assert_eq!(err.to_string(), "Invalid argument 'data': expected a string");
    }
}
