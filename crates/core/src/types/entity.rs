//! Catalog entities as returned by the dashboard backend.
//!
//! Field names are camelCase on the wire. Only the backend assigns IDs and
//! timestamps; the dashboard never constructs these records itself except in
//! tests and the mock backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{BillboardId, StoreId, UserId};

/// A store owned by exactly one user.
///
/// A store can only be deleted once all of its dependent records
/// (billboards, products, categories) have been removed. The backend
/// enforces this; the dashboard only reports the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A promotional billboard belonging to exactly one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: BillboardId,
    pub store_id: StoreId,
    pub label: String,
    /// Secure URL of the uploaded background image.
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
