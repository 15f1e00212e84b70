//! Edstock - Application Entry Point
//!
//! This is the main entry point for the Edstock admin API server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edstock::{
    config::{Config, LogFormat},
    create_router, db,
    services::AdminService,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Edstock server...");

    let state = match config.database.url.as_deref() {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = db::create_pool(url, config.database.max_connections).await?;
            db::test_connection(&pool).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool).await?;

            AppState::with_pool(pool, config.clone())
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store; data will not persist");
            AppState::in_memory(config.clone())
        }
    };

    if config.seed.enabled {
        let created = AdminService::seed_default_admins(state.admins(), &config.seed).await?;
        tracing::info!(created, "Default admin accounts ensured");
    }

    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
