//! Hugging Face Inference API client
//!
//! Encapsulates the remote summarization call: payload shaping, auth, timeout
//! and extraction of the summary from either response shape.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{InferencePayload, InferenceResponse};
use crate::errors::SummarizerError;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Anything that can turn normalized text into a summary.
///
/// Empty request content is rejected before this is called; markup-only
/// content still arrives here as an empty string.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError>;
}

/// Client for a single hosted summarization model.
#[derive(Clone)]
pub struct InferenceClient {
    http: Client,
    endpoint: Url,
}

impl InferenceClient {
    pub fn new(config: &AppConfig) -> Result<Self, SummarizerError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.hf_token))
            .map_err(|e| SummarizerError::Config(format!("HF_TOKEN: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SummarizerError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint_url()?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Summarize for InferenceClient {
    #[tracing::instrument(level = "info", skip(self, text), fields(input_chars = text.chars().count()))]
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        #[cfg(feature = "debug-logs")]
        info!("Sending inference input:\n{}", text);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&InferencePayload::new(text))
            .send()
            .await?;

        let status = response.status();
        info!(status = status.as_u16(), "Inference service responded");

        if !status.is_success() {
            let status_msg = response
                .error_for_status_ref()
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| format!("HTTP status {} for url ({})", status, self.endpoint));
            let body = response.text().await.unwrap_or_default();
            let body: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
            let message = if body.is_empty() {
                status_msg
            } else {
                format!("{}: {}", status_msg, body)
            };
            return Err(SummarizerError::Upstream(message));
        }

        let bytes = response.bytes().await?;

        let parsed: InferenceResponse = serde_json::from_slice(&bytes).map_err(|e| {
            SummarizerError::Upstream(format!("invalid response from inference service: {}", e))
        })?;

        if let Some(upstream_error) = parsed.first_output().and_then(|o| o.error.as_deref()) {
            warn!(error = %upstream_error, "Inference service reported an error with a success status");
        }

        let summary = parsed.summary();
        if summary.is_empty() {
            warn!("Inference response had no summary_text or generated_text");
        }
        Ok(summary)
    }
}
