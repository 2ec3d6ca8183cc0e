use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("{0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Upstream(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SummarizerError {
    /// HTTP status code reported to callers for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::Validation(_) => 400,
            SummarizerError::Upstream(_) | SummarizerError::Config(_) => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else if error.is_connect() {
            format!("could not connect to inference service: {}", error)
        } else {
            error.to_string()
        };
        SummarizerError::Upstream(message)
    }
}

impl From<url::ParseError> for SummarizerError {
    fn from(error: url::ParseError) -> Self {
        SummarizerError::Config(format!("invalid endpoint URL: {}", error))
    }
}
