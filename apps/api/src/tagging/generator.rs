//! Tag Generator: one model call per posting, parsed into a `TagSet`.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::extraction::JobRecord;
use crate::llm_client::{ChatModel, LlmClient};
use crate::tagging::prompt_builder::{build_prompt, TagLimits};
use crate::tagging::tag_set::TagSet;
use crate::tagging::TagError;

/// Owns the model handle. Built once at startup and shared by all requests.
#[derive(Clone)]
pub struct TagGenerator {
    model: Arc<dyn ChatModel>,
}

impl TagGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Builds a generator backed by `LlmClient`.
    ///
    /// Fails with `TagError::Configuration` when no credential was resolved;
    /// no network traffic happens in that case.
    pub fn from_config(config: &Config) -> Result<Self, TagError> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or(TagError::Configuration)?;
        let client = LlmClient::new(
            api_key,
            config.openai_model.clone(),
            config.openai_base_url.clone(),
        )?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn model_name(&self) -> &str {
        self.model.model()
    }

    pub async fn generate_tags(
        &self,
        record: &JobRecord,
        limits: &TagLimits,
    ) -> Result<TagSet, TagError> {
        let prompt = build_prompt(record, limits);
        info!(
            "Requesting tags for {} from {} ({} prompt chars)",
            record.url,
            self.model.model(),
            prompt.chars().count()
        );

        let raw = self.model.complete_json(&prompt).await?;
        let tags = TagSet::from_response(&raw)?;

        info!(
            "Tags generated for {}: {}",
            record.url,
            tags.categories()
                .iter()
                .map(|(key, terms)| format!("{key}={}", terms.len()))
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(tags)
    }
}
