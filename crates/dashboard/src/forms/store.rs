//! Store form.
//!
//! Edit mode is the settings page of an existing store; create mode is the
//! store-creation modal shown to users without a store.

use storepee_core::{Store, StoreFormValues, StoreId};

use super::entity::{EntityForm, Saved};
use super::mode::{CopyTable, FormCopy, ModeKind};
use crate::api::ApiRoutes;
use crate::navigation::{DashboardRoute, Navigation};

const COPY: CopyTable = CopyTable {
    create: FormCopy {
        title: "Create store",
        description: "Add a new store to manage products and categories",
        action: "Continue",
        success: "Store created.",
    },
    edit: FormCopy {
        title: "Settings",
        description: "Manage store preferences",
        action: "Save changes",
        success: "Store updated.",
    },
};

/// Stores of the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreForm;

impl EntityForm for StoreForm {
    type Id = StoreId;
    type Record = Store;
    type Values = StoreFormValues;

    const KIND: &'static str = "store";
    const REQUIRES_CREATED_ID: bool = true;

    fn record_id(record: &Store) -> StoreId {
        record.id
    }

    fn collection_path(&self) -> String {
        ApiRoutes::stores()
    }

    fn resource_path(&self, id: StoreId) -> String {
        ApiRoutes::store(id)
    }

    fn copy(&self, mode: ModeKind) -> FormCopy {
        COPY.get(mode)
    }

    /// A new store gets a full page load of its own root so the store
    /// switcher and layout pick it up; renames stay on the settings page.
    fn after_save(&self, saved: Saved<StoreId>) -> Navigation {
        match saved {
            Saved::Created(Some(id)) => Navigation::Assign(DashboardRoute::Store(id)),
            Saved::Created(None) | Saved::Updated(_) => Navigation::Stay,
        }
    }

    fn after_delete(&self) -> DashboardRoute {
        DashboardRoute::Root
    }

    fn delete_failed_message(&self) -> &'static str {
        "Make sure you removed all products and categories first."
    }
}
