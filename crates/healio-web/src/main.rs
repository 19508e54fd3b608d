//! Healio Web Server
//!
//! Run with: cargo run -p healio-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("healio=debug,info")),
        )
        .init();

    info!("🔬 Starting Healio Web Server...");

    let config = healio_web::config::Config::load()?;
    info!(
        backend = %config.predictor.backend,
        "Predictor backend configured"
    );

    // Create app state
    let state = healio_web::state::AppState::from_config(&config);

    // Build router
    let app = healio_web::router::build_router(state, &config.server.static_dir);

    // Bind to the configured address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("🚀 Server listening on http://{}", addr);
    info!(
        "📱 Open your browser and navigate to http://localhost:{}",
        config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
