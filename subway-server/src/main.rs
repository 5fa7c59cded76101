use subway_server::config::ServerConfig;
use subway_server::store::Store;
use subway_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // Build app state
    let state = AppState::new(Store::new(), config.fee_policy);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, fee_policy = %config.fee_policy, "subway server listening");
    info!("endpoints: /health /stations /lines /lines/:id/sections /sections /fares/extra");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until killed
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
