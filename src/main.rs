/// fedialias server binary
use anyhow::Context as _;
use fedialias::{config::GatewayConfig, context::AppContext, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fedialias=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = GatewayConfig::from_env().context("failed to load configuration")?;

    // Create application context (validates config, builds the alias store)
    let ctx = AppContext::new(config).context("failed to build application context")?;

    // Start server
    server::serve(ctx).await.context("server error")?;

    Ok(())
}
