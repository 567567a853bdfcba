// src/api/types.rs
// Wire types for the REST surface.

use serde::{Deserialize, Serialize};

/// Successful classification response for POST /api/classify
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub categoria: String,
    pub resposta_sugerida: String,
    pub texto_processado: String,
}

/// Inline JSON body variant of POST /api/classify
#[derive(Debug, Deserialize)]
pub struct InlineText {
    pub text: String,
}

/// GET /api/health payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
