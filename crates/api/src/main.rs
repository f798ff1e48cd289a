use anyhow::Context;

use phonehub_api::app::{build_app, services::AppServices};
use phonehub_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    phonehub_observability::init();

    let config = ApiConfig::from_env();
    let services = AppServices::from_config(&config).context("failed to load catalog")?;
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
