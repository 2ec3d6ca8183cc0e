use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::SummarizerError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),
    #[error("could not read request body: {0}")]
    BodyRejected(#[from] BytesRejection),
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),
}

impl ApiError {
    /// Status code and client-facing message for this error.
    #[must_use]
    pub fn status_and_message(&self) -> (u16, String) {
        match self {
            ApiError::NotFound => (404, self.to_string()),
            ApiError::InvalidBody(_) => (400, self.to_string()),
            ApiError::BodyRejected(rejection) => (rejection.status().as_u16(), self.to_string()),
            ApiError::Summarizer(SummarizerError::Config(_)) => {
                (500, "internal server error".to_string())
            }
            ApiError::Summarizer(inner) => (inner.status_code(), inner.to_string()),
        }
    }

    /// Log server-side failures; called where the response is built.
    pub fn log_failure(&self) {
        match self {
            ApiError::Summarizer(SummarizerError::Config(_)) => {
                tracing::error!(error = %self, "Configuration error while handling request");
            }
            ApiError::Summarizer(inner) if inner.status_code() >= 500 => {
                tracing::error!(error = %inner, "Summarization failed");
            }
            _ => {}
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidBody(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_failure();
        let (code, message) = self.status_and_message();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
