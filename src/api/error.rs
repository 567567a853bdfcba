// src/api/error.rs
// Centralized error handling for HTTP API responses.
// Client errors (400) carry their message verbatim; server errors (500) are
// logged and wrapped in a generic "Erro ao processar" envelope so no
// internal detail leaks to callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Error taxonomy for a classification request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Arquivo inválido. Use .txt ou .pdf")]
    InvalidFileType,

    #[error("Nenhum email fornecido")]
    EmptyInput,

    #[error("Email muito curto (mínimo 10 caracteres)")]
    TooShort,

    #[error("falha na API de classificação: {0}")]
    Upstream(String),

    #[error("falha ao extrair texto: {0}")]
    Extraction(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFileType | ApiError::EmptyInput | ApiError::TooShort => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) | ApiError::Extraction(_) | ApiError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("request failed: {}", self);
            format!("Erro ao processar: {}", self)
        } else {
            self.to_string()
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": message,
            })),
        )
            .into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
