//! In-memory backend serving the dashboard REST surface.
//!
//! | Method | Path |
//! |---|---|
//! | POST | `/api/stores` |
//! | PATCH / DELETE | `/api/stores/{store_id}` |
//! | POST | `/api/{store_id}/billboards` |
//! | PATCH / DELETE | `/api/{store_id}/billboards/{billboard_id}` |
//!
//! Deleting a store that still has billboards, or a billboard marked as
//! used by categories, answers `409 Conflict` with `{"error": "..."}`.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{patch, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use storepee_core::{Billboard, BillboardId, Store, StoreId, UserId};

/// A request as seen by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Default)]
struct Catalog {
    stores: HashMap<StoreId, Store>,
    billboards: HashMap<BillboardId, Billboard>,
    billboards_in_use: HashSet<BillboardId>,
    requests: Vec<RecordedRequest>,
}

/// Shared handle to the backend's data.
#[derive(Debug, Clone)]
pub struct MockBackend {
    catalog: Arc<Mutex<Catalog>>,
    session_token: Arc<str>,
    user_id: UserId,
}

/// Error answer with the `{"error": "..."}` body.
struct ApiFailure(StatusCode, &'static str);

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiFailure>;

#[derive(Debug, Deserialize)]
struct StoreBody {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BillboardBody {
    #[serde(default)]
    label: String,
    #[serde(default)]
    image_url: String,
}

impl MockBackend {
    /// Backend accepting `session_token` as bearer token.
    pub fn new(session_token: &str) -> Self {
        Self {
            catalog: Arc::default(),
            session_token: Arc::from(session_token),
            user_id: UserId::parse("user_integration").expect("Test user id is valid"),
        }
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/stores", post(create_store))
            .route(
                "/api/stores/{store_id}",
                patch(update_store).delete(delete_store),
            )
            .route("/api/{store_id}/billboards", post(create_billboard))
            .route(
                "/api/{store_id}/billboards/{billboard_id}",
                patch(update_billboard).delete(delete_billboard),
            )
            .layer(middleware::from_fn_with_state(self.clone(), require_session))
            .layer(middleware::from_fn_with_state(self.clone(), record_request))
            .with_state(self.clone())
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.catalog().requests.clone()
    }

    pub fn store(&self, id: StoreId) -> Option<Store> {
        self.catalog().stores.get(&id).cloned()
    }

    pub fn billboard(&self, id: BillboardId) -> Option<Billboard> {
        self.catalog().billboards.get(&id).cloned()
    }

    pub fn billboards_of(&self, store_id: StoreId) -> Vec<Billboard> {
        self.catalog()
            .billboards
            .values()
            .filter(|billboard| billboard.store_id == store_id)
            .cloned()
            .collect()
    }

    pub fn insert_store(&self, name: &str) -> Store {
        let now = Utc::now();
        let store = Store {
            id: StoreId::new_v4(),
            name: name.to_owned(),
            user_id: self.user_id.clone(),
            created_at: now,
            updated_at: now,
        };
        self.catalog().stores.insert(store.id, store.clone());
        store
    }

    pub fn insert_billboard(&self, store_id: StoreId, label: &str, image_url: &str) -> Billboard {
        let now = Utc::now();
        let billboard = Billboard {
            id: BillboardId::new_v4(),
            store_id,
            label: label.to_owned(),
            image_url: image_url.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.catalog()
            .billboards
            .insert(billboard.id, billboard.clone());
        billboard
    }

    /// Mark a billboard as referenced by a category.
    pub fn mark_billboard_in_use(&self, id: BillboardId) {
        self.catalog().billboards_in_use.insert(id);
    }
}

async fn record_request(State(backend): State<MockBackend>, request: Request, next: Next) -> Response {
    backend.catalog().requests.push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_owned(),
    });
    next.run(request).await
}

async fn require_session(State(backend): State<MockBackend>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == &*backend.session_token);

    if authorized {
        next.run(request).await
    } else {
        ApiFailure(StatusCode::UNAUTHORIZED, "Unauthenticated").into_response()
    }
}

async fn create_store(State(backend): State<MockBackend>, Json(body): Json<StoreBody>) -> ApiResult<Store> {
    if body.name.is_empty() {
        return Err(ApiFailure(StatusCode::BAD_REQUEST, "Name is required"));
    }
    Ok(Json(backend.insert_store(&body.name)))
}

async fn update_store(
    State(backend): State<MockBackend>,
    Path(store_id): Path<StoreId>,
    Json(body): Json<StoreBody>,
) -> ApiResult<Store> {
    if body.name.is_empty() {
        return Err(ApiFailure(StatusCode::BAD_REQUEST, "Name is required"));
    }
    let mut catalog = backend.catalog();
    let store = catalog
        .stores
        .get_mut(&store_id)
        .ok_or(ApiFailure(StatusCode::NOT_FOUND, "Store not found"))?;
    store.name = body.name;
    store.updated_at = Utc::now();
    Ok(Json(store.clone()))
}

async fn delete_store(State(backend): State<MockBackend>, Path(store_id): Path<StoreId>) -> ApiResult<Store> {
    let mut catalog = backend.catalog();
    if !catalog.stores.contains_key(&store_id) {
        return Err(ApiFailure(StatusCode::NOT_FOUND, "Store not found"));
    }
    if catalog
        .billboards
        .values()
        .any(|billboard| billboard.store_id == store_id)
    {
        return Err(ApiFailure(
            StatusCode::CONFLICT,
            "Store still has billboards",
        ));
    }
    catalog
        .stores
        .remove(&store_id)
        .map(Json)
        .ok_or(ApiFailure(StatusCode::NOT_FOUND, "Store not found"))
}

async fn create_billboard(
    State(backend): State<MockBackend>,
    Path(store_id): Path<StoreId>,
    Json(body): Json<BillboardBody>,
) -> ApiResult<Billboard> {
    if body.label.is_empty() {
        return Err(ApiFailure(StatusCode::BAD_REQUEST, "Label is required"));
    }
    if body.image_url.is_empty() {
        return Err(ApiFailure(StatusCode::BAD_REQUEST, "Image URL is required"));
    }
    if backend.store(store_id).is_none() {
        return Err(ApiFailure(StatusCode::NOT_FOUND, "Store not found"));
    }
    Ok(Json(backend.insert_billboard(store_id, &body.label, &body.image_url)))
}

async fn update_billboard(
    State(backend): State<MockBackend>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
    Json(body): Json<BillboardBody>,
) -> ApiResult<Billboard> {
    if body.label.is_empty() || body.image_url.is_empty() {
        return Err(ApiFailure(StatusCode::BAD_REQUEST, "Label and image URL are required"));
    }
    let mut catalog = backend.catalog();
    let billboard = catalog
        .billboards
        .get_mut(&billboard_id)
        .filter(|billboard| billboard.store_id == store_id)
        .ok_or(ApiFailure(StatusCode::NOT_FOUND, "Billboard not found"))?;
    billboard.label = body.label;
    billboard.image_url = body.image_url;
    billboard.updated_at = Utc::now();
    Ok(Json(billboard.clone()))
}

async fn delete_billboard(
    State(backend): State<MockBackend>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> ApiResult<Billboard> {
    let mut catalog = backend.catalog();
    if !catalog
        .billboards
        .get(&billboard_id)
        .is_some_and(|billboard| billboard.store_id == store_id)
    {
        return Err(ApiFailure(StatusCode::NOT_FOUND, "Billboard not found"));
    }
    if catalog.billboards_in_use.contains(&billboard_id) {
        return Err(ApiFailure(
            StatusCode::CONFLICT,
            "Billboard is used by categories",
        ));
    }
    catalog
        .billboards
        .remove(&billboard_id)
        .map(Json)
        .ok_or(ApiFailure(StatusCode::NOT_FOUND, "Billboard not found"))
}
