use std::sync::Arc;

use anyhow::Context as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tutor_relay::{config::RelayConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tutor_relay=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY is not set; /api/chat will answer 500 until it is");
    }

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config).context("failed to build HTTP client")?);
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!("tutor relay listening on http://{bind_addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
