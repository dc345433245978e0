//! Headless UI components.
//!
//! Each component holds the state and rules of one piece of the dashboard
//! UI; rendering is left to the host.

mod api_alert;
mod billboard_table;
mod confirm_modal;
mod data_table;
mod image_field;
mod store_modal;

pub use api_alert::{AlertVariant, ApiAlert};
pub use billboard_table::{BillboardColumn, CellAction, Clipboard, DATE_FORMAT, columns};
pub use confirm_modal::{ConfirmModal, ModalAction};
pub use data_table::TableColumn;
pub use image_field::{ImageField, UploadInfo, UploadResult, UploadWidget, UploadWidgetConfig};
pub use store_modal::StoreModal;
