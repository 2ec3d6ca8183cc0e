use summarizer::api::{AppState, create_router};
use summarizer::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarizer::setup_logging();

    let config = AppConfig::from_env()?;
    tracing::info!(model = %config.model, "Starting summarizer server");

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr = config.listen_addr();
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
