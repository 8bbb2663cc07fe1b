//! Test doubles for the model seam.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ChatModel, LlmError};

/// Replies with a fixed text and records every prompt it receives.
pub struct RecordingModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for RecordingModel {
    fn model(&self) -> &str {
        "recording-model"
    }

    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
