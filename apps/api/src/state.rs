use std::sync::Arc;

use crate::config::Config;
use crate::extraction::JobExtractor;
use crate::tagging::TagGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: JobExtractor,
    /// `None` when no model credential was found at startup.
    pub generator: Option<Arc<TagGenerator>>,
}

impl AppState {
    pub fn credential_available(&self) -> bool {
        self.generator.is_some()
    }
}
