//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service.

use crate::config::ConfigError;
use axum::http::StatusCode;
use moodsense_core::ports::PortError;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Maps a port error to the status and message a handler returns.
///
/// Invalid input is the user's to fix; anything else came from the reasoning service.
pub fn port_error_response(err: PortError) -> (StatusCode, String) {
    match err {
        PortError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        PortError::Unexpected(message) => (
            StatusCode::BAD_GATEWAY,
            format!("The reasoning service failed: {}", message),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_a_bad_request_with_the_message() {
        let (status, body) =
            port_error_response(PortError::InvalidInput("Please write something first.".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Please write something first.");
    }

    #[test]
    fn service_failure_is_a_bad_gateway() {
        let (status, body) = port_error_response(PortError::Unexpected("quota".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("quota"));
    }

    #[test]
    fn startup_errors_convert_into_api_error() {
        let err: ApiError = ConfigError::MissingVar("GEMINI_API_KEY".to_string()).into();
        assert!(matches!(err, ApiError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing the environment variable GEMINI_API_KEY"
        );

        let err: ApiError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy").into();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
