use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use storefront_ai::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront_ai=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let state = AppState::from_config(&config).context("failed to build completion client")?;

    tracing::info!(
        app = %config.app_name,
        service = %config.service_name,
        version = %config.service_version,
        provider = %config.openai_base_url,
        model = %config.openai_model,
        "starting storefront service"
    );

    let app = routes::create_router().with_state(Arc::new(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(%addr, "🚀 storefront running");
    axum::serve(listener, app).await?;

    Ok(())
}
