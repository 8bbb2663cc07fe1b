// Tag generation: prompt building, the model call, and tolerant parsing of
// the reply into five term lists.
// All model traffic goes through llm_client.

pub mod coercion;
pub mod generator;
pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod tag_set;
#[cfg(test)]
pub mod testing;

use thiserror::Error;

use crate::llm_client::LlmError;

pub use generator::TagGenerator;
pub use prompt_builder::TagLimits;
pub use tag_set::TagSet;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("no credential available")]
    Configuration,

    /// The reply was not a JSON object. `raw` is kept for diagnosis.
    #[error("Model response is not a valid JSON object ({reason}): {raw}")]
    ResponseFormat { raw: String, reason: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl TagError {
    /// Client-safe description, without the raw model text.
    pub fn summary(&self) -> String {
        match self {
            TagError::ResponseFormat { reason, .. } => {
                format!("Model response is not a valid JSON object: {reason}")
            }
            other => other.to_string(),
        }
    }
}
