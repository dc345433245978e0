//! Billboard commands.

use storepee_core::{BillboardFormValues, BillboardId, StoreId};
use storepee_dashboard::DashboardError;
use storepee_dashboard::components::{ImageField, ModalAction, UploadInfo, UploadResult, UploadWidget};
use storepee_dashboard::config::DashboardConfig;
use storepee_dashboard::forms::{BillboardForm, BillboardFormController, FormMode};
use storepee_dashboard::session::StoreContext;
use tracing::info;

use super::{CommandError, confirm, connect};

/// Upload widget for an image that is already hosted.
///
/// The terminal has no upload dialog; the URL given on the command line is
/// reported as the finished upload.
struct HostedImage(String);

impl UploadWidget for HostedImage {
    fn open(&mut self, on_uploaded: &mut dyn FnMut(UploadResult)) {
        on_uploaded(UploadResult {
            info: UploadInfo {
                secure_url: std::mem::take(&mut self.0),
            },
        });
    }
}

fn form_values(
    controller: &BillboardFormController,
    label: String,
    image_url: String,
) -> BillboardFormValues {
    let mut image = ImageField::new(controller.defaults().image_url.clone());
    image.upload(&mut HostedImage(image_url), !controller.controls_enabled());
    BillboardFormValues::new(label, image.value())
}

pub async fn create(
    config: &DashboardConfig,
    store_id: StoreId,
    label: String,
    image_url: String,
) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut controller = BillboardFormController::new(BillboardForm::new(StoreContext::new(store_id)), None);
    let values = form_values(&controller, label, image_url);
    let saved = controller.submit(&services, values).await.into_result()?;

    info!(billboard_id = ?saved.id(), "Billboard created");
    Ok(())
}

pub async fn update(
    config: &DashboardConfig,
    store_id: StoreId,
    billboard_id: BillboardId,
    label: String,
    image_url: String,
) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut controller = edit_controller(store_id, billboard_id);
    let values = form_values(&controller, label, image_url);
    controller.submit(&services, values).await.into_result()?;
    Ok(())
}

pub async fn delete(
    config: &DashboardConfig,
    store_id: StoreId,
    billboard_id: BillboardId,
    yes: bool,
) -> Result<(), CommandError> {
    let services = connect(config)?;

    let mut controller = edit_controller(store_id, billboard_id);
    controller.request_delete();

    match confirm(controller.confirm_modal(), &format!("billboard {billboard_id}"), yes)? {
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

fn edit_controller(store_id: StoreId, billboard_id: BillboardId) -> BillboardFormController {
    BillboardFormController::with_mode(
        BillboardForm::new(StoreContext::new(store_id)),
        FormMode::Edit(billboard_id),
        BillboardFormValues::default(),
    )
}
