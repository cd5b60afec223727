use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prefab_api::config::ServerConfig;
use prefab_api::router::build_app;
use prefab_api::state::AppState;
use prefab_cloud::{MemoryStorage, ObjectStorage, S3Config, S3Storage};
use prefab_events::{EmailConfig, EmailDelivery, LogOnlyNotifier, RecoveryNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prefab_api=debug,prefab_db=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = prefab_db::connect_with_retry(
        &database_url,
        config.db_connect_attempts,
        Duration::from_secs(config.db_connect_backoff_secs),
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    prefab_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    prefab_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Collaborators ---
    let storage: Arc<dyn ObjectStorage> = match S3Config::from_env() {
        Some(s3) => Arc::new(S3Storage::connect(s3).await),
        None => {
            tracing::warn!("AWS_S3_BUCKET not set, uploads are kept in memory");
            Arc::new(MemoryStorage::new())
        }
    };

    let notifier: Arc<dyn RecoveryNotifier> = match EmailConfig::from_env() {
        Some(email) => {
            tracing::info!(smtp_host = %email.smtp_host, "SMTP delivery configured");
            Arc::new(EmailDelivery::new(email))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, recovery links are only logged");
            Arc::new(LogOnlyNotifier)
        }
    };

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        storage,
        notifier,
    };

    let app = build_app(state, &config);

    // --- Start server ---
    let host = config.host.parse().context("Invalid HOST address")?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
