//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Resolution-path failures never surface through this type; they degrade
/// into warnings so location queries always return a best-effort answer.
/// Only the date/time and format errors are fatal to a request.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External provider error (network, timeout, credentials)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Zone identifier rejected by the catalog
    #[error("Invalid timezone identifier: {0}")]
    InvalidZone(String),

    /// Date/time string could not be parsed
    #[error("Malformed dateTime: {0}")]
    InvalidDateTime(String),

    /// Floating input with no zone to anchor it
    #[error("Ambiguous input: {0}")]
    AmbiguousDateTime(String),

    /// Unknown format preset or invalid pattern token
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this error is the caller's fault rather than the system's
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidZone(_)
                | Self::InvalidDateTime(_)
                | Self::AmbiguousDateTime(_)
                | Self::InvalidFormat(_)
        )
    }
}
