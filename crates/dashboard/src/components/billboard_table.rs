//! Billboard list table and its per-row actions.

use serde::Serialize;
use storepee_core::{Billboard, BillboardId};
use tracing::debug;

use super::confirm_modal::ConfirmModal;
use super::data_table::TableColumn;
use crate::api::{ApiRoutes, Transport};
use crate::forms::{DeleteOutcome, DeleteRequest, DisposeHandle, GENERIC_FAILURE, Lifetime, run_delete};
use crate::navigation::{DashboardRoute, Navigator};
use crate::notify::Notifier;
use crate::services::Services;
use crate::session::StoreContext;

/// Display format of the `createdAt` column, e.g. `June 3, 2024`.
pub const DATE_FORMAT: &str = "%B %-d, %Y";

const ID_COPIED: &str = "Billboard Id copied";

/// System clipboard of the host.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// One row of the billboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardColumn {
    pub id: BillboardId,
    pub label: String,
    pub created_at: String,
}

impl From<&Billboard> for BillboardColumn {
    fn from(billboard: &Billboard) -> Self {
        Self {
            id: billboard.id,
            label: billboard.label.clone(),
            created_at: billboard.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Columns of the billboard table.
#[must_use]
pub fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::sortable("label", "Label"),
        TableColumn::sortable("createdAt", "Date"),
        TableColumn::new("actions", ""),
    ]
}

/// Actions menu of one billboard row: copy id, update, delete.
#[derive(Debug)]
pub struct CellAction {
    ctx: StoreContext,
    row: BillboardColumn,
    open: bool,
    loading: bool,
    lifetime: Lifetime,
}

impl CellAction {
    #[must_use]
    pub fn new(ctx: StoreContext, row: BillboardColumn) -> Self {
        Self {
            ctx,
            row,
            open: false,
            loading: false,
            lifetime: Lifetime::new(),
        }
    }

    #[must_use]
    pub const fn row(&self) -> &BillboardColumn {
        &self.row
    }

    #[must_use]
    pub const fn confirm_modal(&self) -> ConfirmModal {
        ConfirmModal::new(self.open, self.loading)
    }

    #[must_use]
    pub fn dispose_handle(&self) -> DisposeHandle {
        self.lifetime.handle()
    }

    pub fn copy_id<C, S>(&self, clipboard: &C, notifier: &S)
    where
        C: Clipboard + ?Sized,
        S: Notifier + ?Sized,
    {
        clipboard.write_text(&self.row.id.to_string());
        notifier.success(ID_COPIED);
    }

    /// Open the billboard's edit page.
    pub fn update<N: Navigator + ?Sized>(&self, navigator: &N) {
        navigator.push(&DashboardRoute::Billboard(self.ctx.store_id, self.row.id));
    }

    pub fn request_delete(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.open = true;
        true
    }

    pub fn cancel_delete(&mut self) {
        if !self.loading {
            self.open = false;
        }
    }

    /// Delete the row's billboard. Only acts while the modal is open.
    pub async fn confirm_delete<T, N, S>(&mut self, services: &Services<T, N, S>) -> DeleteOutcome
    where
        T: Transport,
        N: Navigator,
        S: Notifier,
    {
        if !self.open {
            debug!(billboard_id = %self.row.id, "Row delete ignored, not confirmed");
            return DeleteOutcome::NotConfirmed;
        }
        if self.loading {
            return DeleteOutcome::Busy;
        }

        self.loading = true;

        let outcome = run_delete(
            services,
            &self.lifetime,
            DeleteRequest {
                kind: "billboard",
                path: ApiRoutes::billboard(self.ctx.store_id, self.row.id),
                after: DashboardRoute::Billboards(self.ctx.store_id),
                failure_message: GENERIC_FAILURE,
            },
        )
        .await;

        if !matches!(outcome, DeleteOutcome::Abandoned) {
            self.loading = false;
            self.open = false;
        }

        outcome
    }
}
