//! Confirmation modal gating destructive actions.

/// What the host should do after a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Run the confirm callback.
    Confirm,
    /// Run the close callback.
    Close,
    /// The button is disabled.
    Ignored,
}

/// Props of the "Are you sure?" modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmModal {
    open: bool,
    loading: bool,
}

impl ConfirmModal {
    pub const TITLE: &'static str = "Are you sure?";
    pub const DESCRIPTION: &'static str = "This action cannot be undone.";
    pub const CANCEL_LABEL: &'static str = "Cancel";
    pub const CONFIRM_LABEL: &'static str = "Continue";

    #[must_use]
    pub const fn new(open: bool, loading: bool) -> Self {
        Self { open, loading }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn confirm_enabled(&self) -> bool {
        self.open && !self.loading
    }

    #[must_use]
    pub const fn cancel_enabled(&self) -> bool {
        self.open && !self.loading
    }

    #[must_use]
    pub const fn press_confirm(&self) -> ModalAction {
        if self.confirm_enabled() {
            ModalAction::Confirm
        } else {
            ModalAction::Ignored
        }
    }

    #[must_use]
    pub const fn press_cancel(&self) -> ModalAction {
        if self.cancel_enabled() {
            ModalAction::Close
        } else {
            ModalAction::Ignored
        }
    }
}
