//! Form mode and the user-facing copy selected by it.

/// Whether a form creates a new entity or edits an existing one.
///
/// Decided once, when the controller is built from its initial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id: Copy> FormMode<Id> {
    /// `Edit(id)` when there is an initial record, `Create` otherwise.
    #[must_use]
    pub fn from_initial(initial_id: Option<Id>) -> Self {
        initial_id.map_or(Self::Create, Self::Edit)
    }

    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Create => ModeKind::Create,
            Self::Edit(_) => ModeKind::Edit,
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// ID of the edited entity.
    #[must_use]
    pub const fn id(&self) -> Option<Id> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }
}

/// [`FormMode`] without the ID, used as the key of copy tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Create,
    Edit,
}

/// User-facing strings of a form in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    /// Page heading.
    pub title: &'static str,
    /// Sub-heading.
    pub description: &'static str,
    /// Label of the submit button.
    pub action: &'static str,
    /// Toast shown after a successful save.
    pub success: &'static str,
}

/// Create/edit copy table of one entity.
#[derive(Debug, Clone, Copy)]
pub struct CopyTable {
    pub create: FormCopy,
    pub edit: FormCopy,
}

impl CopyTable {
    #[must_use]
    pub const fn get(&self, kind: ModeKind) -> FormCopy {
        match kind {
            ModeKind::Create => self.create,
            ModeKind::Edit => self.edit,
        }
    }
}

/// Toast for any failed save, whatever the cause.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Toast after a successful delete.
pub const DELETED: &str = "Deleted.";
