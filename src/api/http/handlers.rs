// src/api/http/handlers.rs

use axum::{Json, extract::Request, extract::State, response::IntoResponse};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::types::{ClassifyResponse, HealthResponse};
use crate::config::SERVICE_NAME;
use crate::ingest;
use crate::state::AppState;

/// POST /api/classify
///
/// Accepts either a multipart upload with a `file` field (.txt or .pdf) or
/// a JSON body `{"text": "..."}`. Validation failures short-circuit before
/// the upstream model is called.
pub async fn classify_handler(
    State(app_state): State<Arc<AppState>>,
    request: Request,
) -> ApiResult<Json<ClassifyResponse>> {
    let email_text =
        ingest::extract_email_text(request, Path::new(&app_state.config.upload_dir)).await?;

    let outcome = app_state.classifier.classify(&email_text).await?;
    info!(categoria = %outcome.categoria, "email classified");

    Ok(Json(ClassifyResponse {
        success: true,
        categoria: outcome.categoria,
        resposta_sugerida: outcome.resposta_sugerida,
        texto_processado: outcome.texto_processado,
    }))
}

/// GET /api/health — liveness check, no failure modes.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "online",
        service: SERVICE_NAME,
    })
}
