//! Store commands.

use storepee_core::{StoreFormValues, StoreId};
use storepee_dashboard::DashboardError;
use storepee_dashboard::components::{ModalAction, StoreModal};
use storepee_dashboard::config::DashboardConfig;
use storepee_dashboard::forms::{FormMode, StoreForm, StoreFormController};
use tracing::info;

use super::{CommandError, confirm, connect};

/// Create a store through the store-creation modal.
pub async fn create(config: &DashboardConfig, name: String) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut modal = StoreModal::new();
    modal.on_open();
    let saved = modal
        .submit(&services, StoreFormValues::new(name))
        .await
        .ok_or(DashboardError::OperationFailed)?
        .into_result()?;

    info!(store_id = ?saved.id(), "Store created");
    Ok(())
}

/// Rename a store from its settings form.
pub async fn rename(
    config: &DashboardConfig,
    store_id: StoreId,
    name: String,
) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut controller =
        StoreFormController::with_mode(StoreForm, FormMode::Edit(store_id), StoreFormValues::default());
    controller
        .submit(&services, StoreFormValues::new(name))
        .await
        .into_result()?;
    Ok(())
}

/// Delete a store after confirmation.
pub async fn delete(config: &DashboardConfig, store_id: StoreId, yes: bool) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut controller =
        StoreFormController::with_mode(StoreForm, FormMode::Edit(store_id), StoreFormValues::default());
    controller.request_delete();

    match confirm(controller.confirm_modal(), &format!("store {store_id}"), yes)? {
        ModalAction::Confirm => {
            controller.confirm_delete(&services).await.into_result()?;
            Ok(())
        }
        ModalAction::Close | ModalAction::Ignored => {
            controller.cancel_delete();
            Err(DashboardError::Cancelled.into())
        }
    }
}
