//! Resource catalog request handlers.

use axum::Json;
use axum::extract::{Path, State};
use mhc_core::models::{CategoryResources, ResourceList, ResourceRecord};
use tracing::debug;

use crate::AppState;
use crate::error::AppResult;

/// `GET /` — every resource in seed order.
pub async fn list_resources_handler(State(state): State<AppState>) -> Json<ResourceList> {
    Json(state.catalog.list_all())
}

/// `GET /category/{category}` — case-insensitive category filter.
pub async fn resources_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<CategoryResources> {
    Json(state.catalog.list_by_category(&category))
}

/// `GET /{id}` — single resource, 404 when the id is unknown or not numeric.
pub async fn get_resource_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ResourceRecord>> {
    lookup(&state, &id)
}

/// `GET /category/` — no category name, so the segment is taken as an id.
pub async fn empty_category_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ResourceRecord>> {
    lookup(&state, "category")
}

fn lookup(state: &AppState, raw_id: &str) -> AppResult<Json<ResourceRecord>> {
    let record = state.catalog.get_by_raw_id(raw_id).inspect_err(|e| {
        debug!(error = %e, "resource lookup failed");
    })?;
    Ok(Json(record))
}
