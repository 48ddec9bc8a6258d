use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use erp_gateway::{create_router, AppContext, Config, UpstreamClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);

    let upstream = UpstreamClient::new(config.upstream_timeout_secs)?;
    let app_context = Arc::new(AppContext::new(Arc::new(config), upstream));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Gateway listening");

    axum::serve(listener, create_router(app_context)).await?;
    Ok(())
}
