use class_booking_service::{
    adapters::postgres::{
        PostgresBookingStore, PostgresClassStore, PostgresMemberStore, PostgresProbe, pool,
    },
    api::{handlers::AppState, router::create_router},
    application::ServiceDependencies,
    config::Config,
};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "class_booking_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize database connection pool
    let pool = pool::connect(&config.database).await?;
    pool::migrate(&pool).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Database pool ready"
    );

    // Initialize adapters
    let service_deps = ServiceDependencies {
        member_store: Arc::new(PostgresMemberStore::new(pool.clone())),
        class_store: Arc::new(PostgresClassStore::new(pool.clone())),
        booking_store: Arc::new(PostgresBookingStore::new(pool.clone())),
    };
    let store_probe = Arc::new(PostgresProbe::new(pool.clone()));

    let app = create_router(Arc::new(AppState::new(service_deps, store_probe)));

    let listener = tokio::net::TcpListener::bind(&config.host).await?;
    tracing::info!("Server listening on {}", config.host);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = ?e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
