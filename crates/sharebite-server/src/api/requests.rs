use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use sharebite_models::{FoodRequest, RequestDraft, RequestPatch};

use crate::api::AppState;

// GET /requests
pub async fn list_requests(State(state): State<AppState>) -> Json<Vec<FoodRequest>> {
    Json(state.store.list_requests().await)
}

// POST /requests
pub async fn create_request(
    State(state): State<AppState>,
    Json(draft): Json<RequestDraft>,
) -> (StatusCode, Json<FoodRequest>) {
    let request = state.store.create_request(draft).await;
    tracing::info!(id = %request.id, listing_id = %request.listing_id, "request created");
    (StatusCode::CREATED, Json(request))
}

// PATCH /requests/{id} — accepted status cascades to the listing
pub async fn patch_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RequestPatch>,
) -> Json<Value> {
    state.store.patch_request(&id, &patch).await;
    Json(json!({ "success": true }))
}
