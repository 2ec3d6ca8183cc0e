/// WebNote summarizer - turns an HTML note into a short plain-text summary.
///
/// The service accepts `POST /summarize` with `{"content": "<html>"}`, strips the
/// markup, caps the text length, and forwards it to a hosted text-summarization
/// model (Hugging Face Inference API). The model output is returned as
/// `{"summary": "..."}`.
///
/// # Architecture
///
/// Each request is handled independently:
/// 1. `utils::html` normalizes the HTML into plain text
/// 2. `clients::InferenceClient` calls the remote model and extracts the summary
/// 3. `api` maps the result (or error) onto an HTTP response
///
/// The same pipeline is served either by a standalone axum server or, with the
/// `lambda` feature, by an AWS Lambda handler.
///
/// # Example
///
/// ```no_run
/// use summarizer::clients::InferenceClient;
/// use summarizer::core::config::AppConfig;
/// use summarizer::features::summarize::summarize_content;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarizer::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = InferenceClient::new(&config)?;
///
///     let result = summarize_content(&client, Some("<p>Meeting notes...</p>")).await?;
///     println!("Summary: {}", result.summary);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod utils;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format.
///
/// Reads the level from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
