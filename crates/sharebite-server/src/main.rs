#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod api;
mod store;

use std::sync::Arc;

use api::{AppState, listings, requests};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, patch},
};
use store::StoreTable;
use tower_http::cors::CorsLayer;

// Fixed port; clients on the local network derive the URL from the host
// they loaded the app from.
const PORT: u16 = 3001;

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/listings/{id}",
            patch(listings::patch_listing).delete(listings::delete_listing),
        )
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/requests/{id}", patch(requests::patch_request))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sharebite_server=debug".into()),
        )
        .with_target(false)
        .init();

    let state = AppState::new(Arc::new(StoreTable::seeded()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT))
        .await
        .expect("Failed to bind the remote store port");

    tracing::info!("ShareBite remote store running on http://localhost:{PORT}");
    tracing::info!("Available on the local network at your IP address");

    axum::serve(listener, app)
        .await
        .expect("Failed to run axum server");
}
