// src/ingest/mod.rs
// Input extraction: turn an incoming request into raw email text.
// Validation happens here, before any upstream call is made.

pub mod upload;

pub use upload::{TempUpload, UploadKind};

use axum::{
    Json, RequestExt,
    extract::{Multipart, Request},
    http::header::CONTENT_TYPE,
};
use std::path::Path;

use crate::api::ApiError;
use crate::api::types::InlineText;

/// Minimum accepted email length, counted on the trimmed text.
pub const MIN_EMAIL_CHARS: usize = 10;

/// Pull the raw email text out of an incoming request.
///
/// Multipart requests must carry a `file` field with a `.txt` or `.pdf`
/// name; JSON requests must carry a string `text` field. Anything else is
/// a missing-input error.
pub async fn extract_email_text(request: Request, upload_dir: &Path) -> Result<String, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let email_text = if content_type.starts_with("multipart/form-data") {
        let multipart = request
            .extract::<Multipart, _>()
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;
        extract_from_upload(multipart, upload_dir).await?
    } else if content_type.starts_with("application/json") {
        let Json(body) = request
            .extract::<Json<InlineText>, _>()
            .await
            .map_err(|_| ApiError::EmptyInput)?;
        body.text
    } else {
        return Err(ApiError::EmptyInput);
    };

    if email_text.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    if email_text.trim().chars().count() < MIN_EMAIL_CHARS {
        return Err(ApiError::TooShort);
    }

    Ok(email_text)
}

/// File path: spool to disk, extract, and let the guard delete the spool.
async fn extract_from_upload(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> Result<String, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Unexpected(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or(ApiError::InvalidFileType)?;
        let kind = UploadKind::from_filename(&filename).ok_or(ApiError::InvalidFileType)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        let spooled = TempUpload::write(upload_dir, &filename, &bytes).await?;
        // The guard drops on both the Ok and Err path, removing the file.
        return spooled.extract_text(kind).await;
    }

    Err(ApiError::EmptyInput)
}
