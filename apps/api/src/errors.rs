use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures the extraction pipeline itself can raise.
///
/// Heuristic extractors never fail: a missing section, keyword or figure resolves to an
/// empty value. Only decoding the input and provisioning language resources can go wrong.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed PDF byte stream or plain text that is not valid UTF-8.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Tokenizer, stopword list or lemmatizer could not be provisioned.
    #[error("Language resources unavailable: {0}")]
    ResourceUnavailable(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::Pipeline(PipelineError::Decode(msg)) => {
                tracing::warn!("Rejected undecodable document: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DECODE_ERROR",
                    format!("Document could not be decoded: {msg}"),
                )
            }
            AppError::Pipeline(PipelineError::ResourceUnavailable(msg)) => {
                tracing::error!("Language resources unavailable: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RESOURCE_UNAVAILABLE",
                    "Text analysis resources are not available".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
