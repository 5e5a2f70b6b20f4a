use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use sharebite_models::{FoodListing, ListingDraft, ListingPatch};

use crate::api::AppState;
use crate::store::DeleteError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBody {
    pub requester_id: String,
}

// GET /listings
pub async fn list_listings(State(state): State<AppState>) -> Json<Vec<FoodListing>> {
    Json(state.store.list_listings().await)
}

// POST /listings
pub async fn create_listing(
    State(state): State<AppState>,
    Json(draft): Json<ListingDraft>,
) -> (StatusCode, Json<FoodListing>) {
    let listing = state.store.create_listing(draft).await;
    tracing::info!(id = %listing.id, title = %listing.title, "listing created");
    (StatusCode::CREATED, Json(listing))
}

// PATCH /listings/{id}
pub async fn patch_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ListingPatch>,
) -> Json<Value> {
    state.store.patch_listing(&id, &patch).await;
    Json(json!({ "success": true }))
}

// DELETE /listings/{id} — donor-only, requesterId verified here
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DeleteBody>,
) -> (StatusCode, Json<Value>) {
    match state.store.delete_listing(&id, &body.requester_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(DeleteError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Listing not found" })),
        ),
        Err(DeleteError::Forbidden) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Only the donor can delete this listing" })),
        ),
    }
}
