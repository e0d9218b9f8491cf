//! ledger-api - Account and Transaction Ledger Backend API
//!
//! Creates customer accounts, records signed transactions against them and
//! lists transaction history.

use std::sync::Arc;

use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledger_api::api::{self, AppState};
use ledger_api::config::{LogFormat, StorageBackend};
use ledger_api::db;
use ledger_api::service::TransactionService;
use ledger_api::store::{MemoryStore, PgAccountStore, PgOperationTypeStore, PgTransactionStore};
use ledger_api::Config;

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Wire the service to the configured backend.
/// Returns the pool too when one was opened, so it can be closed on shutdown.
async fn build_service(config: &Config) -> anyhow::Result<(TransactionService, Option<PgPool>)> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok((TransactionService::in_memory(MemoryStore::new()), None))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for postgres storage"))?;

            tracing::info!("Connecting to database...");
            let pool = db::connect(database_url, config.database_max_connections).await?;
            db::verify_connection(&pool).await?;

            if config.run_migrations {
                tracing::info!("Running database migrations...");
                db::migrate(&pool).await?;
            }

            if !db::check_schema(&pool).await? {
                tracing::error!("Database schema is not complete. Please run migrations.");
                return Err(anyhow::anyhow!("Database schema incomplete"));
            }

            tracing::info!("Database connected successfully");

            let service = TransactionService::new(
                Arc::new(PgAccountStore::new(pool.clone())),
                Arc::new(PgTransactionStore::new(pool.clone())),
                Arc::new(PgOperationTypeStore::new(pool.clone())),
            );
            Ok((service, Some(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    tracing::info!("Starting ledger-api server");

    let (service, pool) = build_service(&config).await?;
    let app = api::build_app(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Cleanup
    tracing::info!("Server shutting down...");
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database connections closed");
    }
    tracing::info!("Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
