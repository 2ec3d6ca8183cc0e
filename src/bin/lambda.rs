use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use summarizer::api::AppState;
use summarizer::api::lambda::function_handler;
use summarizer::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    summarizer::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Config error: {}", e);
        Error::from(e.to_string())
    })?;
    let state = AppState::new(&config).map_err(|e| Error::from(e.to_string()))?;
    let state = &state;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(state, event).await
    }))
    .await
}
