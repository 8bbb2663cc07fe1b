//! URL → JobRecord → prompt → model → TagSet, stopping at the first failure.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{JobExtractor, JobRecord};
use crate::tagging::{TagError, TagGenerator, TagLimits, TagSet};

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub record: JobRecord,
    pub tags: TagSet,
}

/// Runs extraction then generation for `url`.
///
/// Order of checks:
/// 1. no generator (no credential) → `Configuration`, before any fetch
/// 2. fetch failure → `Fetch`
/// 3. all-empty record → `ExtractionEmpty`, the model is never called
/// 4. model or parse failure → `Tagging`
pub async fn run_pipeline(
    extractor: &JobExtractor,
    generator: Option<&TagGenerator>,
    url: &str,
    limits: &TagLimits,
) -> Result<PipelineOutput, AppError> {
    let generator = generator.ok_or(TagError::Configuration)?;

    let record = extractor.extract(url).await?;
    if record.is_empty() {
        warn!("No usable content extracted from {}", url);
        return Err(AppError::ExtractionEmpty(url.to_string()));
    }

    let tags = generator.generate_tags(&record, limits).await?;
    if tags.is_empty() {
        warn!("Model returned no usable terms for {}", url);
    }

    info!("Pipeline completed for {}", url);
    Ok(PipelineOutput { record, tags })
}
