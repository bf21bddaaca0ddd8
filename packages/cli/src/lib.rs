// ABOUTME: Server bootstrap for Worktrack
// ABOUTME: Logging setup, database connection, router assembly and graceful shutdown

pub mod config;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use worktrack_api::{create_router, AppState};
use worktrack_config::{DEFAULT_LOG_FILTER, RUST_LOG};

pub use config::{Config, ConfigError};

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and serves the API until Ctrl+C or SIGTERM.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let pool = worktrack_storage::connect(&config.db_config())
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;

    let app = create_router(AppState::new(pool.clone()));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
