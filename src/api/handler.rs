//! HTTP handlers for the summarize and health routes.
//!
//! Both the axum router and the Lambda adapter call into
//! [`summarize_body`] so the two surfaces behave identically.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::state::AppState;
use crate::core::models::{SummarizeRequest, SummaryResult};
use crate::features::summarize_content;

/// Parse a raw `/summarize` body and run the summarization pipeline.
///
/// # Errors
///
/// `InvalidBody` for a body that is not JSON, `Summarizer(Validation)` for
/// missing content and `Summarizer(Upstream)` when the model call fails.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize_body(state: &AppState, body: &[u8]) -> Result<SummaryResult, ApiError> {
    info!(body_len = body.len(), "Received summarize request");

    let request = SummarizeRequest::from_body(body)?;
    let result = summarize_content(state.summarizer.as_ref(), request.content_str()).await?;

    info!(summary_chars = result.summary.chars().count(), "Summary generated");
    Ok(result)
}

pub async fn summarize(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummaryResult>, ApiError> {
    let body = body?;
    summarize_body(&state, &body).await.map(Json)
}

#[must_use]
pub fn health_body(state: &AppState) -> Value {
    json!({ "status": "ok", "model": state.model })
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(health_body(&state))
}
