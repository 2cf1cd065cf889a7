//! Axum route handlers for the Extraction API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::models::{ExtractionProfile, RawDocument, ResumeRecord};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ExtractionProfile,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload: a `file` part carrying the document. The part's filename selects the
/// decode path; a separate `filename` text part is used only when the part has none.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut file: Option<(Bytes, Option<String>)> = None;
    let mut fallback_filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let part_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((data, part_name));
            }
            Some("filename") => {
                fallback_filename = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (data, part_name) =
        file.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    let filename = part_name
        .filter(|name| !name.trim().is_empty())
        .or(fallback_filename)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("a filename is required".to_string()))?;

    info!("Parsing résumé '{}' ({} bytes)", filename, data.len());

    let doc = RawDocument::new(data, filename);
    let parser = state.parser.clone();
    let record = tokio::task::spawn_blocking(move || parser.parse(&doc))
        .await
        .map_err(|e| anyhow::anyhow!("parse task failed: {e}"))??;

    Ok(Json(record))
}

/// GET /api/v1/profile
///
/// Returns the reference data the parser was built with.
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: state.parser.profile().clone(),
    })
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}
