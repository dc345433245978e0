//! Generic create/edit/delete lifecycle of an entity form.
//!
//! ```text
//! IDLE --submit()--> SUBMITTING --success--> IDLE (navigated away)
//!                               --failure--> IDLE (same view)
//! IDLE --request_delete()--> CONFIRM_PENDING
//! CONFIRM_PENDING --cancel_delete()--> IDLE
//! CONFIRM_PENDING --confirm_delete()--> SUBMITTING --success/failure--> IDLE
//! ```

use storepee_core::{Validate, ValidationErrors};
use tracing::{debug, info, instrument, warn};

use super::delete::{DeleteOutcome, DeleteRequest, run_delete};
use super::entity::{EntityForm, Saved};
use super::lifetime::{DisposeHandle, Lifetime};
use super::mode::{FormCopy, FormMode, GENERIC_FAILURE};
use crate::api::{ApiError, ApiRequest, ApiResponse, CreatedResource, Transport};
use crate::components::ConfirmModal;
use crate::error::DashboardError;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::services::Services;

/// Observable state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Submitting,
    ConfirmPending,
}

/// Result of [`EntityFormController::submit`].
#[derive(Debug)]
pub enum SubmitOutcome<Id> {
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// Another operation is in flight; nothing was sent.
    Busy,
    Saved(Saved<Id>),
    /// The backend refused or could not be reached.
    Failed(ApiError),
    /// The view was disposed before the response arrived.
    Abandoned,
}

impl<Id> SubmitOutcome<Id> {
    /// Collapse the outcome for callers that stop on failure.
    ///
    /// # Errors
    ///
    /// Returns the validation or API error, or
    /// `DashboardError::OperationFailed` when nothing completed.
    pub fn into_result(self) -> Result<Saved<Id>, DashboardError> {
        match self {
            Self::Saved(saved) => Ok(saved),
            Self::Invalid(errors) => Err(errors.into()),
            Self::Failed(e) => Err(e.into()),
            Self::Busy | Self::Abandoned => Err(DashboardError::OperationFailed),
        }
    }
}

/// Controller behind one entity form and its delete modal.
pub struct EntityFormController<F: EntityForm> {
    form: F,
    mode: FormMode<F::Id>,
    defaults: F::Values,
    submitting: bool,
    confirm_open: bool,
    field_errors: ValidationErrors,
    lifetime: Lifetime,
}

impl<F: EntityForm> std::fmt::Debug for EntityFormController<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityFormController")
            .field("kind", &F::KIND)
            .field("mode", &self.mode)
            .field("submitting", &self.submitting)
            .field("confirm_open", &self.confirm_open)
            .finish_non_exhaustive()
    }
}

impl<F: EntityForm> EntityFormController<F> {
    /// Build a controller from the record loaded for the page.
    ///
    /// `Some(record)` selects edit mode with the record's fields as
    /// defaults; `None` selects create mode with empty fields.
    #[must_use]
    pub fn new(form: F, initial: Option<&F::Record>) -> Self {
        let mode = FormMode::from_initial(initial.map(F::record_id));
        let defaults = initial
            .map(|record| F::Values::from(record))
            .unwrap_or_default();
        Self::with_mode(form, mode, defaults)
    }

    /// Build a controller for a known mode without a loaded record.
    #[must_use]
    pub fn with_mode(form: F, mode: FormMode<F::Id>, defaults: F::Values) -> Self {
        Self {
            form,
            mode,
            defaults,
            submitting: false,
            confirm_open: false,
            field_errors: ValidationErrors::new(),
            lifetime: Lifetime::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode<F::Id> {
        self.mode
    }

    #[must_use]
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Title, description, button label and success toast for the mode.
    #[must_use]
    pub fn copy(&self) -> FormCopy {
        self.form.copy(self.mode.kind())
    }

    /// Initial field values.
    #[must_use]
    pub const fn defaults(&self) -> &F::Values {
        &self.defaults
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    /// Inputs and buttons are disabled while an operation is in flight.
    #[must_use]
    pub const fn controls_enabled(&self) -> bool {
        !self.submitting
    }

    /// The delete trigger is only shown when editing.
    #[must_use]
    pub const fn delete_available(&self) -> bool {
        self.mode.is_edit()
    }

    #[must_use]
    pub const fn state(&self) -> ControllerState {
        if self.submitting {
            ControllerState::Submitting
        } else if self.confirm_open {
            ControllerState::ConfirmPending
        } else {
            ControllerState::Idle
        }
    }

    /// Errors of the last validation, for inline display.
    #[must_use]
    pub const fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// Props of the delete confirmation modal.
    #[must_use]
    pub const fn confirm_modal(&self) -> ConfirmModal {
        ConfirmModal::new(self.confirm_open, self.submitting)
    }

    /// Handle for the view to dispose this controller.
    #[must_use]
    pub fn dispose_handle(&self) -> DisposeHandle {
        self.lifetime.handle()
    }

    /// Validate `values` and keep the errors for inline display.
    ///
    /// # Errors
    ///
    /// Returns the field errors when any field is invalid.
    pub fn validate(&mut self, values: &F::Values) -> Result<(), ValidationErrors> {
        let result = values.validate();
        self.field_errors = result.clone().err().unwrap_or_default();
        result
    }

    /// Validate, then create (POST) or update (PATCH) the entity.
    #[instrument(skip_all, fields(kind = F::KIND, mode = ?self.mode.kind()))]
    pub async fn submit<T, N, S>(
        &mut self,
        services: &Services<T, N, S>,
        values: F::Values,
    ) -> SubmitOutcome<F::Id>
    where
        T: Transport,
        N: Navigator,
        S: Notifier,
    {
        if self.submitting {
            debug!("Submit ignored, operation in flight");
            return SubmitOutcome::Busy;
        }

        if let Err(errors) = self.validate(&values) {
            debug!(fields = errors.len(), "Submit blocked by validation");
            return SubmitOutcome::Invalid(errors);
        }

        let body = match serde_json::to_value(&values) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to encode form values");
                services.notifier.error(GENERIC_FAILURE);
                return SubmitOutcome::Failed(ApiError::Request(e.to_string()));
            }
        };

        let mode = self.mode;
        let request = match mode {
            FormMode::Create => ApiRequest::post(self.form.collection_path(), body),
            FormMode::Edit(id) => ApiRequest::patch(self.form.resource_path(id), body),
        };

        self.submitting = true;

        let result = services
            .transport
            .send(request)
            .await
            .and_then(ApiResponse::error_for_status)
            .and_then(|response| match mode {
                FormMode::Create => created_id::<F>(&response).map(Saved::Created),
                FormMode::Edit(id) => Ok(Saved::Updated(id)),
            });

        if self.lifetime.is_disposed() {
            debug!("Submit finished after dispose, ignoring");
            return SubmitOutcome::Abandoned;
        }

        self.submitting = false;

        match result {
            Ok(saved) => {
                info!(id = ?saved.id(), "Saved");
                self.form.after_save(saved).apply(&services.navigator);
                services.notifier.success(self.copy().success);
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                services.notifier.error(GENERIC_FAILURE);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Open the delete confirmation modal.
    ///
    /// Returns whether the modal opened; it stays closed in create mode and
    /// while an operation is in flight.
    pub fn request_delete(&mut self) -> bool {
        if !self.delete_available() || self.submitting {
            return false;
        }
        self.confirm_open = true;
        true
    }

    /// Close the confirmation modal without deleting.
    pub fn cancel_delete(&mut self) {
        if !self.submitting {
            self.confirm_open = false;
        }
    }

    /// Delete the entity. Only acts while the confirmation modal is open.
    #[instrument(skip_all, fields(kind = F::KIND))]
    pub async fn confirm_delete<T, N, S>(&mut self, services: &Services<T, N, S>) -> DeleteOutcome
    where
        T: Transport,
        N: Navigator,
        S: Notifier,
    {
        if !self.confirm_open {
            debug!("Delete ignored, not confirmed");
            return DeleteOutcome::NotConfirmed;
        }
        if self.submitting {
            return DeleteOutcome::Busy;
        }
        let FormMode::Edit(id) = self.mode else {
            self.confirm_open = false;
            return DeleteOutcome::NotConfirmed;
        };

        self.submitting = true;

        let outcome = run_delete(
            services,
            &self.lifetime,
            DeleteRequest {
                kind: F::KIND,
                path: self.form.resource_path(id),
                after: self.form.after_delete(),
                failure_message: self.form.delete_failed_message(),
            },
        )
        .await;

        if !matches!(outcome, DeleteOutcome::Abandoned) {
            self.submitting = false;
            self.confirm_open = false;
        }

        outcome
    }
}

/// ID named by a create response. Any 2xx counts as created unless the
/// form needs the ID to navigate.
fn created_id<F: EntityForm>(response: &ApiResponse) -> Result<Option<F::Id>, ApiError> {
    match response.json::<CreatedResource<F::Id>>() {
        Ok(created) => Ok(Some(created.id)),
        Err(e) if F::REQUIRES_CREATED_ID => Err(e),
        Err(e) => {
            debug!(error = %e, "Create response names no id");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storepee_core::{BillboardFormValues, StoreFormValues, StoreId};

    use super::*;
    use crate::forms::{BillboardForm, StoreForm};
    use crate::navigation::DashboardRoute;
    use crate::notify::Toast;
    use crate::session::StoreContext;
    use crate::test_support::{FakeTransport, NavEvent, services, test_billboard};

    fn create_controller(store_id: StoreId) -> EntityFormController<BillboardForm> {
        EntityFormController::new(BillboardForm::new(StoreContext::new(store_id)), None)
    }

    #[tokio::test]
    async fn test_submit_invalid_sends_nothing() {
        let store_id = StoreId::new_v4();
        let services = services(FakeTransport::new());
        let mut controller = create_controller(store_id);

        let outcome = controller
            .submit(&services, BillboardFormValues::new("", "https://cdn/img1.png"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(services.transport.requests().is_empty());
        assert!(controller.field_errors().get("label").is_some());
        assert!(services.notifier.toasts().is_empty());
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[tokio::test]
    async fn test_failed_submit_stays_and_resets_submitting() {
        let store_id = StoreId::new_v4();
        let services = services(FakeTransport::new().respond(500, "Internal error"));
        let mut controller = create_controller(store_id);

        let outcome = controller
            .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Status { status: 500, .. })));
        assert!(!controller.is_submitting());
        assert!(services.navigator.events().is_empty());
        assert_eq!(services.notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_network_error_is_generic_failure() {
        let store_id = StoreId::new_v4();
        let services = services(FakeTransport::new().fail("connection refused"));
        let mut controller = create_controller(store_id);

        let outcome = controller
            .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Request(_))));
        assert_eq!(services.notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_billboard_create_with_empty_body_succeeds() {
        let store_id = StoreId::new_v4();
        let services = services(FakeTransport::new().respond(201, ""));
        let mut controller = create_controller(store_id);

        let outcome = controller
            .submit(&services, BillboardFormValues::new("Summer Sale", "https://cdn/img1.png"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Saved(Saved::Created(None))));
        assert_eq!(
            services.navigator.events(),
            vec![NavEvent::Refresh, NavEvent::Push(DashboardRoute::Billboards(store_id))]
        );
        assert_eq!(services.notifier.toasts(), vec![Toast::success("Billboard created.")]);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_store_create_without_id_fails() {
        let services = services(FakeTransport::new().respond(200, "{}"));
        let mut controller = EntityFormController::new(StoreForm, None);

        let outcome = controller
            .submit(&services, StoreFormValues::new("Outlet"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Response(_))));
        assert!(services.navigator.events().is_empty());
        assert_eq!(services.notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_busy() {
        let store_id = StoreId::new_v4();
        let controller = create_controller(store_id);
        let handle = controller.dispose_handle();
        // Disposing mid-request leaves the controller submitting
        let services = services(
            FakeTransport::new()
                .respond(200, "{}")
                .on_send(move || handle.dispose()),
        );
        let mut controller = controller;

        let first = controller
            .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
            .await;
        assert!(matches!(first, SubmitOutcome::Abandoned));
        assert_eq!(controller.state(), ControllerState::Submitting);
        assert!(!controller.controls_enabled());

        let second = controller
            .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
            .await;

        assert!(matches!(second, SubmitOutcome::Busy));
        assert_eq!(services.transport.requests().len(), 1);
        assert!(matches!(second.into_result(), Err(DashboardError::OperationFailed)));
    }

    #[tokio::test]
    async fn test_delete_while_in_flight_is_busy() {
        let billboard = test_billboard(StoreId::new_v4());
        let controller = EntityFormController::new(
            BillboardForm::new(StoreContext::new(billboard.store_id)),
            Some(&billboard),
        );
        let handle = controller.dispose_handle();
        let services = services(
            FakeTransport::new()
                .respond(200, "{}")
                .on_send(move || handle.dispose()),
        );
        let mut controller = controller;

        assert!(controller.request_delete());
        assert!(matches!(controller.confirm_delete(&services).await, DeleteOutcome::Abandoned));
        assert!(controller.is_submitting());
        assert!(controller.is_confirm_open());

        assert!(!controller.request_delete());
        assert!(matches!(controller.confirm_delete(&services).await, DeleteOutcome::Busy));
        assert!(matches!(
            controller
                .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
                .await,
            SubmitOutcome::Busy
        ));
        controller.cancel_delete();
        assert!(controller.is_confirm_open());
        assert_eq!(services.transport.requests().len(), 1);
        assert!(services.navigator.events().is_empty());
        assert!(services.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_delete_requires_open_modal() {
        let billboard = test_billboard(StoreId::new_v4());
        let services = services(FakeTransport::new());
        let mut controller = EntityFormController::new(
            BillboardForm::new(StoreContext::new(billboard.store_id)),
            Some(&billboard),
        );

        let outcome = controller.confirm_delete(&services).await;

        assert!(matches!(outcome, DeleteOutcome::NotConfirmed));
        assert!(services.transport.requests().is_empty());
        assert!(services.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_request_delete_ignored_in_create_mode() {
        let mut controller = create_controller(StoreId::new_v4());
        assert!(!controller.request_delete());
        assert!(!controller.is_confirm_open());
    }

    #[tokio::test]
    async fn test_cancel_delete_closes_modal() {
        let billboard = test_billboard(StoreId::new_v4());
        let mut controller = EntityFormController::new(
            BillboardForm::new(StoreContext::new(billboard.store_id)),
            Some(&billboard),
        );

        assert!(controller.request_delete());
        assert_eq!(controller.state(), ControllerState::ConfirmPending);
        assert!(controller.confirm_modal().is_open());

        controller.cancel_delete();
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[tokio::test]
    async fn test_failed_delete_resets_flags() {
        let billboard = test_billboard(StoreId::new_v4());
        let services = services(
            FakeTransport::new().respond(409, r#"{"error":"Billboard is used by categories"}"#),
        );
        let mut controller = EntityFormController::new(
            BillboardForm::new(StoreContext::new(billboard.store_id)),
            Some(&billboard),
        );

        controller.request_delete();
        let outcome = controller.confirm_delete(&services).await;

        match outcome {
            DeleteOutcome::Failed(e) => assert!(e.is_blocked_by_dependents()),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!controller.is_submitting());
        assert!(!controller.is_confirm_open());
        assert!(services.navigator.events().is_empty());
        assert_eq!(
            services.notifier.toasts(),
            vec![Toast::error(controller.form().delete_failed_message())]
        );
    }

    #[tokio::test]
    async fn test_successful_delete_navigates_to_list() {
        let billboard = test_billboard(StoreId::new_v4());
        let services = services(FakeTransport::new().respond(200, "{}"));
        let mut controller = EntityFormController::new(
            BillboardForm::new(StoreContext::new(billboard.store_id)),
            Some(&billboard),
        );

        controller.request_delete();
        let outcome = controller.confirm_delete(&services).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted));
        assert_eq!(
            services.navigator.events(),
            vec![
                NavEvent::Refresh,
                NavEvent::Push(DashboardRoute::Billboards(billboard.store_id)),
            ]
        );
        assert!(!controller.is_confirm_open());
    }

    #[tokio::test]
    async fn test_response_after_dispose_is_ignored() {
        let store_id = StoreId::new_v4();
        let controller = create_controller(store_id);
        let handle = controller.dispose_handle();
        let services = services(
            FakeTransport::new()
                .respond(200, format!(r#"{{"id":"{}"}}"#, uuid::Uuid::new_v4()))
                .on_send(move || handle.dispose()),
        );
        let mut controller = controller;

        let outcome = controller
            .submit(&services, BillboardFormValues::new("Sale", "https://cdn/a.png"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Abandoned));
        assert_eq!(services.transport.requests().len(), 1);
        assert!(services.navigator.events().is_empty());
        assert!(services.notifier.toasts().is_empty());
    }
}
