use anyhow::Context;
use part_identifier::api::identify::{IdentifyState, OpenAiConfig, OpenAiVisionClient};
use part_identifier::api::routes::build_router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = OpenAiConfig::default().from_env();
    if config.api_key.is_none() {
        // Not fatal: provider calls will fail on the generic 500 path.
        tracing::warn!("OPENAI_API_KEY is not set; identification requests will fail");
    }

    let client = OpenAiVisionClient::new(config).context("failed to build vision client")?;
    let state = IdentifyState {
        client: Arc::new(client),
    };

    let app = build_router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
