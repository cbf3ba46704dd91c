//! Basketball Player Registry API server
//!
//! Serves the player API and the metrics endpoint on two listeners.

use anyhow::{Context, Result};
use basketball_api_rest::{create_app, metrics_router, ApiConfig, AppState, PrometheusRecorder};
use basketball_application::{PlayerService, PlayerUseCase};
use basketball_common::{init_tracing, AppConfig};
use basketball_infrastructure::{DatabaseConfig, DatabasePool, PgPlayerRepository};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "basketball-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path, layered over config/default
    #[arg(short, long, env = "APP_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.telemetry.log_level, config.telemetry.json_logging)?;

    info!(
        http = %config.http_addr(),
        metrics = %config.metrics_addr(),
        "Starting Basketball Player Registry API"
    );

    let pool = DatabasePool::new(&DatabaseConfig::from(&config.postgres))
        .await
        .context("Failed to connect to database")?;

    if config.postgres.run_migrations {
        pool.run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }

    let repository = Arc::new(PgPlayerRepository::new(pool.pool().clone()));
    let player_service: Arc<dyn PlayerUseCase> = Arc::new(PlayerService::new(repository));
    let recorder = Arc::new(PrometheusRecorder::new().context("Failed to register metrics")?);

    let state = AppState::new(
        ApiConfig::from(&config),
        player_service,
        recorder.clone(),
        Arc::new(pool.clone()),
    );

    let api_listener = TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("Failed to bind API listener on {}", config.http_addr()))?;
    let metrics_listener = TcpListener::bind(config.metrics_addr())
        .await
        .with_context(|| format!("Failed to bind metrics listener on {}", config.metrics_addr()))?;

    info!(addr = %api_listener.local_addr()?, "API server listening");
    info!(addr = %metrics_listener.local_addr()?, "Metrics server listening");

    let api = async {
        axum::serve(api_listener, create_app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    };
    let metrics = async { axum::serve(metrics_listener, metrics_router(recorder)).await };

    let result = tokio::select! {
        result = api => result.context("API server error"),
        result = metrics => result.context("Metrics server error"),
    };

    if let Err(e) = &result {
        error!(error = %e, "Server stopped");
    }

    pool.close().await;
    info!("Shutdown complete");

    result
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
