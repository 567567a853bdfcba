// src/api/http/router.rs
// HTTP router composition for the REST API endpoints

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use super::handlers::{classify_handler, health_handler};
use crate::state::AppState;

/// Main HTTP router: classification plus liveness check.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/classify", post(classify_handler))
        .route("/api/health", get(health_handler))
        .with_state(app_state)
}
