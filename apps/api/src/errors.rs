use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::FetchError;
use crate::tagging::TagError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Every field except the URL came back empty.
    #[error("No usable content could be extracted from {0}")]
    ExtractionEmpty(String),

    #[error(transparent)]
    Tagging(#[from] TagError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Fetch(e) => {
                tracing::warn!("Fetch error: {e}");
                (StatusCode::BAD_GATEWAY, "FETCH_ERROR", e.to_string())
            }
            AppError::ExtractionEmpty(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_EMPTY",
                self.to_string(),
            ),
            AppError::Tagging(TagError::Configuration) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONFIGURATION_ERROR",
                TagError::Configuration.to_string(),
            ),
            AppError::Tagging(e @ TagError::ResponseFormat { raw, .. }) => {
                tracing::error!("Unparsable model response: {raw}");
                (StatusCode::BAD_GATEWAY, "RESPONSE_FORMAT_ERROR", e.summary())
            }
            AppError::Tagging(TagError::Llm(e)) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The language model request failed".to_string(),
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

/// Malformed request bodies get the same JSON error shape as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
