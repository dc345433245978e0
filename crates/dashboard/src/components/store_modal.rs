//! Store-creation modal.
//!
//! Shown to signed-in users who have no store yet, and from the store
//! switcher. The host owns the value; there is no global modal state.

use storepee_core::{StoreFormValues, StoreId};

use crate::api::Transport;
use crate::forms::{StoreForm, StoreFormController, SubmitOutcome};
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::services::Services;

#[derive(Debug)]
pub struct StoreModal {
    open: bool,
    controller: StoreFormController,
}

impl Default for StoreModal {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreModal {
    /// A closed modal with an empty create form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            controller: StoreFormController::new(StoreForm, None),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_open(&mut self) {
        self.open = true;
    }

    /// Close the modal. Ignored while the store is being created.
    pub fn on_close(&mut self) {
        if !self.controller.is_submitting() {
            self.open = false;
        }
    }

    /// Keep the modal open while the user has no store.
    pub fn sync_with_store_count(&mut self, stores: usize) {
        if stores == 0 {
            self.on_open();
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &StoreFormController {
        &self.controller
    }

    /// Create the store. Nothing is sent while the modal is closed.
    pub async fn submit<T, N, S>(
        &mut self,
        services: &Services<T, N, S>,
        values: StoreFormValues,
    ) -> Option<SubmitOutcome<StoreId>>
    where
        T: Transport,
        N: Navigator,
        S: Notifier,
    {
        if !self.open {
            return None;
        }
        Some(self.controller.submit(services, values).await)
    }
}
