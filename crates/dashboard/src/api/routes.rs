//! Paths of the backend REST surface.

use storepee_core::{BillboardId, StoreId};

/// Builder for backend API paths.
pub struct ApiRoutes;

impl ApiRoutes {
    /// `/api/stores`
    #[must_use]
    pub fn stores() -> String {
        "/api/stores".to_string()
    }

    /// `/api/stores/{storeId}`
    #[must_use]
    pub fn store(store_id: StoreId) -> String {
        format!("/api/stores/{store_id}")
    }

    /// `/api/{storeId}` - public API root advertised on the settings page.
    #[must_use]
    pub fn store_api(store_id: StoreId) -> String {
        format!("/api/{store_id}")
    }

    /// `/api/{storeId}/billboards`
    #[must_use]
    pub fn billboards(store_id: StoreId) -> String {
        format!("/api/{store_id}/billboards")
    }

    /// `/api/{storeId}/billboards/{billboardId}`
    #[must_use]
    pub fn billboard(store_id: StoreId, billboard_id: BillboardId) -> String {
        format!("/api/{store_id}/billboards/{billboard_id}")
    }
}
