//! Confirmed delete flow shared by forms and table row actions.

use tracing::{debug, info, warn};

use super::lifetime::Lifetime;
use super::mode::DELETED;
use crate::api::{ApiError, ApiRequest, ApiResponse, Transport};
use crate::error::DashboardError;
use crate::navigation::{DashboardRoute, Navigator};
use crate::notify::Notifier;
use crate::services::Services;

/// Result of [`confirm_delete`](super::EntityFormController::confirm_delete).
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The confirmation gate was closed; nothing was sent.
    NotConfirmed,
    /// Another operation is in flight; nothing was sent.
    Busy,
    Deleted,
    /// The backend refused or could not be reached.
    Failed(ApiError),
    /// The view was disposed before the response arrived.
    Abandoned,
}

impl DeleteOutcome {
    /// Collapse the outcome for callers that stop on failure.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Cancelled` when the delete was not confirmed,
    /// the API error when it failed, and `DashboardError::OperationFailed`
    /// otherwise.
    pub fn into_result(self) -> Result<(), DashboardError> {
        match self {
            Self::Deleted => Ok(()),
            Self::NotConfirmed => Err(DashboardError::Cancelled),
            Self::Failed(e) => Err(e.into()),
            Self::Busy | Self::Abandoned => Err(DashboardError::OperationFailed),
        }
    }
}

/// One delete to perform.
pub(crate) struct DeleteRequest<'a> {
    pub kind: &'static str,
    pub path: String,
    pub after: DashboardRoute,
    pub failure_message: &'a str,
}

/// Send the DELETE and report the outcome.
///
/// Callers own the `submitting`/`confirm_open` flags and reset them unless
/// the outcome is [`DeleteOutcome::Abandoned`].
pub(crate) async fn run_delete<T, N, S>(
    services: &Services<T, N, S>,
    lifetime: &Lifetime,
    request: DeleteRequest<'_>,
) -> DeleteOutcome
where
    T: Transport,
    N: Navigator,
    S: Notifier,
{
    let result = services
        .transport
        .send(ApiRequest::delete(request.path.clone()))
        .await
        .and_then(ApiResponse::error_for_status);

    if lifetime.is_disposed() {
        debug!(kind = request.kind, path = %request.path, "Delete finished after dispose, ignoring");
        return DeleteOutcome::Abandoned;
    }

    match result {
        Ok(_) => {
            info!(kind = request.kind, path = %request.path, "Deleted");
            services.navigator.refresh();
            services.navigator.push(&request.after);
            services.notifier.success(DELETED);
            DeleteOutcome::Deleted
        }
        Err(e) => {
            warn!(
                kind = request.kind,
                path = %request.path,
                error = %e,
                blocked_by_dependents = e.is_blocked_by_dependents(),
                "Delete failed"
            );
            services.notifier.error(request.failure_message);
            DeleteOutcome::Failed(e)
        }
    }
}
