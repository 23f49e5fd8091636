use anyhow::Context;
use recap::api::{AppState, router};
use recap::core::config::AppConfig;
use recap::features::Summarizer;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    recap::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    info!(?config, "Loaded configuration");

    let client = recap::ai::build_client(&config);
    let summarizer = Summarizer::from_config(client, &config)?;
    let app = router(Arc::new(AppState::new(summarizer)));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
