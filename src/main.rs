use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uptime_chat_adapter::config::Config;
use uptime_chat_adapter::keepalive;
use uptime_chat_adapter::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uptime_chat_adapter=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("UPTIMEROBOT_API_KEY is not set; chat replies will report the missing key");
    }

    // Start the keep-alive self-ping loop
    let cancel = CancellationToken::new();
    let keepalive_task = keepalive::spawn(&config, cancel.clone());

    // Build the application router
    let app = routes::router(AppState::new(&config));

    // Start the server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("UptimeRobot chat adapter listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await?;

    // The token is already cancelled by the time serve returns
    keepalive_task.await.ok();
    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    } else {
        tracing::info!("shutdown signal received");
    }
    cancel.cancel();
}
