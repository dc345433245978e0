//! Backend REST API.
//!
//! This module provides:
//! - [`ApiRoutes`] for the resource and collection paths of each entity
//! - [`ApiRequest`]/[`ApiResponse`], transport-neutral wire types
//! - the [`Transport`] seam and its `reqwest` implementation, [`ApiClient`]
//!
//! # Surface
//!
//! ```text
//! POST   /api/stores                               - Create store
//! PATCH  /api/stores/{storeId}                     - Update store
//! DELETE /api/stores/{storeId}                     - Delete store
//! POST   /api/{storeId}/billboards                 - Create billboard
//! PATCH  /api/{storeId}/billboards/{billboardId}   - Update billboard
//! DELETE /api/{storeId}/billboards/{billboardId}   - Delete billboard
//! ```
//!
//! A delete that is blocked by dependent records is answered with
//! `409 Conflict` and a `{"error": "..."}` body.

mod client;
mod error;
mod routes;
mod types;

pub use client::{ApiClient, Transport};
pub use error::ApiError;
pub use routes::ApiRoutes;
pub use types::{ApiMethod, ApiRequest, ApiResponse, CreatedResource};
