use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::AnimeRepository,
    middleware::{make_span_with_request_id, request_id_middleware},
};

pub mod anime;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub anime_repository: Arc<dyn AnimeRepository>,
}

impl AppState {
    pub fn new(anime_repository: Arc<dyn AnimeRepository>) -> Self {
        Self { anime_repository }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/anime", get(anime::list).post(anime::create))
        .route("/anime/recommend", post(anime::recommend))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
