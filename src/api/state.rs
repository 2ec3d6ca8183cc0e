use std::sync::Arc;

use crate::clients::{InferenceClient, Summarize};
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarize>,
    pub model: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, SummarizerError> {
        let client = InferenceClient::new(config)?;
        tracing::info!(endpoint = %client.endpoint(), "Inference client configured");

        Ok(Self {
            summarizer: Arc::new(client),
            model: config.model.clone(),
        })
    }

    /// State backed by any summarizer, e.g. a stub in tests.
    pub fn with_summarizer(summarizer: Arc<dyn Summarize>, model: impl Into<String>) -> Self {
        Self {
            summarizer,
            model: model.into(),
        }
    }
}
