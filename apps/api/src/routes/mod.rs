pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tagging::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/status", get(handlers::handle_status))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route("/api/v1/tags", post(handlers::handle_tags))
        .with_state(state)
}
