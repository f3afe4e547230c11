//! Error types for actor submission.

use thiserror::Error;

/// Errors that can occur while starting an actor run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// A required setting (token or actor id) is not configured.
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),

    /// The configured base URL or actor id does not form a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with something other than `201 Created`.
    #[error("failed to trigger actor (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A `201` response whose body lacks the run status URL.
    #[error("unexpected response body: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_shows_raw_body() {
        let err = SubmitError::Rejected {
            status: 401,
            body: r#"{"error":{"type":"token-not-valid"}}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"failed to trigger actor (HTTP 401): {"error":{"type":"token-not-valid"}}"#
        );
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SubmitError = json_err.into();
        assert!(matches!(err, SubmitError::InvalidResponse(_)));
    }
}
