//! Unified error handling for the dashboard.

use storepee_core::ValidationErrors;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Top-level error type for dashboard front ends.
///
/// Form controllers never return this: they turn failures into
/// notifications. It is used where a front end needs to stop, e.g. the CLI
/// deciding its exit code.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Backend operation failed.
    #[error("Operation failed: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Form values were rejected before submission.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No signed-in session.
    #[error("Unauthenticated: sign in required")]
    Unauthenticated,

    /// The user dismissed a confirmation prompt.
    #[error("Cancelled")]
    Cancelled,

    /// The operation reached the backend but did not succeed.
    #[error("Operation failed")]
    OperationFailed,
}
