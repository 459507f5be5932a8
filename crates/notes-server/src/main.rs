//! Entry point for the notes-server binary.

use notes_server::{
    config::ServerConfig,
    server::{self, ShutdownOutcome},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level, config.log_json);

    tracing::info!(
        address = %config.addr,
        request_timeout_secs = config.request_timeout.as_secs(),
        shutdown_grace_secs = config.shutdown_grace.as_secs(),
        "Configuration loaded"
    );

    // Run server with graceful shutdown
    match server::run_server(config, server::shutdown_signal()).await? {
        ShutdownOutcome::Graceful => tracing::info!("Server shutdown complete"),
        ShutdownOutcome::Forced => tracing::warn!("Server shutdown forced with requests in flight"),
    }

    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
