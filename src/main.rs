//! FixIt Intake - Main Entry Point

use fixit_intake::{build_router, config, ApiState, IntakeConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("FixIt Intake v{}", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| "fixit.json".into());

    let config = IntakeConfig::load(&config_path)
        .unwrap_or_else(|e| {
            tracing::warn!("Config {} not loaded ({}), using defaults", config_path, e);
            IntakeConfig::default()
        })
        .with_env_overrides()?;

    if config.notify_configured() {
        tracing::info!("Email notifications via {} (timeout {}s)", config.notify_url, config.notify_timeout_secs);
    } else {
        tracing::warn!("Notification endpoint not configured; tickets will report email as not sent");
    }

    let state = ApiState::from_config(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Intake API listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
