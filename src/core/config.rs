use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::SummarizerError;

pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct AppConfig {
    pub hf_token: String,
    pub model: String,
    pub api_base: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("hf_token", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hf_token = lookup("HF_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SummarizerError::Config("HF_TOKEN: not set".to_string()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SummarizerError::Config(format!("PORT: {}", e)))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("HF_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| SummarizerError::Config(format!("HF_TIMEOUT_SECS: {}", e)))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            hf_token,
            model: lookup("HF_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: lookup("HF_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        };

        // Fail at startup rather than on the first request.
        config.endpoint_url()?;
        Ok(config)
    }

    /// Full URL of the model endpoint: `{api_base}/{model}`.
    pub fn endpoint_url(&self) -> Result<Url, SummarizerError> {
        let base = self.api_base.trim_end_matches('/');
        let model = self.model.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, model))?)
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
