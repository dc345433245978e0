//! Backend API errors.

use thiserror::Error;

/// Errors that can occur when talking to the dashboard backend.
///
/// The dashboard treats every variant the same way from the user's point of
/// view (one failure toast); the variants exist for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("API request failed: {0}")]
    Request(String),

    /// Backend answered with a non-2xx status.
    #[error("API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the raw body text.
        message: String,
    },

    /// Failed to read or parse a response body.
    #[error("API response error: {0}")]
    Response(String),

    /// Failed to build a request URL.
    #[error("Invalid API URL: {0}")]
    Url(String),
}

impl ApiError {
    /// HTTP status code, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend refused a delete because dependent records
    /// (billboards, products, categories) still reference the entity.
    #[must_use]
    pub const fn is_blocked_by_dependents(&self) -> bool {
        matches!(self, Self::Status { status: 409, .. })
    }
}
