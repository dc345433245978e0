//! Entity form controllers.
//!
//! One generic controller, [`EntityFormController`], drives every form. An
//! [`EntityForm`] implementation supplies the per-entity parts: backend
//! paths, copy, post-save navigation and delete-failure wording.
//!
//! # Flow
//!
//! 1. The page builds a controller from its initial record (or `None`)
//! 2. The form calls [`EntityFormController::submit`] with the field values;
//!    invalid values are stopped by validation and never sent
//! 3. Valid values are POSTed (create) or PATCHed (edit)
//! 4. The delete trigger opens the confirmation modal; only
//!    [`EntityFormController::confirm_delete`] sends the DELETE
//! 5. Outcomes are reported as toasts and navigation

mod billboard;
mod controller;
mod delete;
mod entity;
mod lifetime;
mod mode;
mod store;

pub use billboard::BillboardForm;
pub use controller::{ControllerState, EntityFormController, SubmitOutcome};
pub use delete::DeleteOutcome;
pub(crate) use delete::{DeleteRequest, run_delete};
pub use entity::{EntityForm, Saved};
pub use lifetime::{DisposeHandle, Lifetime};
pub use mode::{CopyTable, DELETED, FormCopy, FormMode, GENERIC_FAILURE, ModeKind};
pub use store::StoreForm;

/// Controller of the billboard page.
pub type BillboardFormController = EntityFormController<BillboardForm>;

/// Controller of the settings page and the store-creation modal.
pub type StoreFormController = EntityFormController<StoreForm>;
