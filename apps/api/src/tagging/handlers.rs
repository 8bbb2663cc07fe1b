//! Axum route handlers for extraction and tag generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::JobRecord;
use crate::tagging::pipeline::{run_pipeline, PipelineOutput};
use crate::state::AppState;
use crate::tagging::TagLimits;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub credential_available: bool,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub record: JobRecord,
    pub is_empty: bool,
}

#[derive(Debug, Deserialize)]
pub struct TagsRequest {
    pub url: String,
    #[serde(flatten)]
    pub limits: TagLimits,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/status
///
/// Lets a client grey out its form when no model credential is configured.
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        credential_available: state.credential_available(),
        model: state.config.openai_model.clone(),
    })
}

/// POST /api/v1/extract
///
/// Fetches the posting and returns the extracted record without calling the model.
pub async fn handle_extract(
    State(state): State<AppState>,
    request: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let Json(request) = request?;
    let url = require_url(&request.url)?;
    let record = state.extractor.extract(url).await?;
    let is_empty = record.is_empty();
    Ok(Json(ExtractResponse { record, is_empty }))
}

/// POST /api/v1/tags
///
/// Full pipeline: fetch → extract → prompt → model → five term lists.
pub async fn handle_tags(
    State(state): State<AppState>,
    request: Result<Json<TagsRequest>, JsonRejection>,
) -> Result<Json<PipelineOutput>, AppError> {
    let Json(request) = request?;
    let url = require_url(&request.url)?;
    request.limits.validate()?;

    let output = run_pipeline(
        &state.extractor,
        state.generator.as_deref(),
        url,
        &request.limits,
    )
    .await?;

    Ok(Json(output))
}

fn require_url(url: &str) -> Result<&str, AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }
    Ok(url)
}
