use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/series", get(handlers::api_series))
        .route("/api/latest", get(handlers::api_latest))
        .with_state(state)
}
