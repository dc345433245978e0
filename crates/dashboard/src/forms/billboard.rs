//! Billboard form (`/{storeId}/billboards/{billboardId}`).

use storepee_core::{Billboard, BillboardFormValues, BillboardId};

use super::entity::{EntityForm, Saved};
use super::mode::{CopyTable, FormCopy, ModeKind};
use crate::api::ApiRoutes;
use crate::navigation::{DashboardRoute, Navigation};
use crate::session::StoreContext;

const COPY: CopyTable = CopyTable {
    create: FormCopy {
        title: "Create billboard",
        description: "Add a new billboard",
        action: "Create",
        success: "Billboard created.",
    },
    edit: FormCopy {
        title: "Edit billboard",
        description: "Edit a billboard",
        action: "Save changes",
        success: "Billboard updated.",
    },
};

/// Billboards of the store in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillboardForm {
    ctx: StoreContext,
}

impl BillboardForm {
    #[must_use]
    pub const fn new(ctx: StoreContext) -> Self {
        Self { ctx }
    }
}

impl EntityForm for BillboardForm {
    type Id = BillboardId;
    type Record = Billboard;
    type Values = BillboardFormValues;

    const KIND: &'static str = "billboard";

    fn record_id(record: &Billboard) -> BillboardId {
        record.id
    }

    fn collection_path(&self) -> String {
        ApiRoutes::billboards(self.ctx.store_id)
    }

    fn resource_path(&self, id: BillboardId) -> String {
        ApiRoutes::billboard(self.ctx.store_id, id)
    }

    fn copy(&self, mode: ModeKind) -> FormCopy {
        COPY.get(mode)
    }

    fn after_save(&self, _saved: Saved<BillboardId>) -> Navigation {
        Navigation::Push(DashboardRoute::Billboards(self.ctx.store_id))
    }

    fn after_delete(&self) -> DashboardRoute {
        DashboardRoute::Billboards(self.ctx.store_id)
    }

    fn delete_failed_message(&self) -> &'static str {
        "Make sure you removed all categories using this billboard first."
    }
}
