//! Description of one editable entity kind.

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use storepee_core::Validate;

use super::mode::{FormCopy, ModeKind};
use crate::navigation::{DashboardRoute, Navigation};

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved<Id> {
    /// Created; carries the ID assigned by the backend when the response
    /// names one.
    Created(Option<Id>),
    Updated(Id),
}

impl<Id: Copy> Saved<Id> {
    #[must_use]
    pub const fn id(&self) -> Option<Id> {
        match self {
            Self::Created(id) => *id,
            Self::Updated(id) => Some(*id),
        }
    }
}

/// Everything an [`EntityFormController`](super::EntityFormController)
/// needs to know about an entity: where it lives on the backend, where to
/// go afterwards and what to tell the user.
pub trait EntityForm {
    /// ID type of the entity.
    type Id: Copy + PartialEq + fmt::Debug + fmt::Display + DeserializeOwned;
    /// Record loaded for the edit page.
    type Record;
    /// Editable fields; also the create/update request body.
    type Values: Validate + Serialize + Default + for<'a> From<&'a Self::Record>;

    /// Short name used in logs.
    const KIND: &'static str;

    /// Whether a create only succeeds once the response names the new ID.
    /// Set by forms that navigate to the created record.
    const REQUIRES_CREATED_ID: bool = false;

    /// ID of a loaded record.
    fn record_id(record: &Self::Record) -> Self::Id;

    /// Collection URL (create).
    fn collection_path(&self) -> String;

    /// Resource URL (update, delete).
    fn resource_path(&self, id: Self::Id) -> String;

    /// Copy for the given mode.
    fn copy(&self, mode: ModeKind) -> FormCopy;

    /// Navigation after a successful create or update.
    fn after_save(&self, saved: Saved<Self::Id>) -> Navigation;

    /// Route pushed after a successful delete.
    fn after_delete(&self) -> DashboardRoute;

    /// Toast for a failed delete, naming the records that must go first.
    fn delete_failed_message(&self) -> &'static str;
}
