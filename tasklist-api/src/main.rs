//! # Tasklist API Server
//!
//! Multi-user to-do backend: users own lists, lists own tasks, and every
//! list or task operation is scoped to the bearer token's user.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/tasklist \
//! JWT_SECRET=$(openssl rand -hex 32) \
//! cargo run -p tasklist-api
//! ```

use tasklist_api::{
    app::{build_router, AppState},
    config::Config,
};
use tasklist_shared::db::{migrations, pool};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Tasklist API Server v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    migrations::ensure_database_exists(&config.database.url).await?;
    let db = pool::create_pool(config.pool_config()).await?;
    migrations::run_migrations(&db).await?;

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tasklist_api=debug,tasklist_shared=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

// Without a working signal handler the server keeps running rather than
// shutting down immediately.
async fn wait_for_shutdown<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_completes_shutdown() {
        let result = tokio::time::timeout(
            Duration::from_millis(100),
            wait_for_shutdown(async { Ok(()) }),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_signal_install_failure_keeps_running() {
        let result = tokio::time::timeout(
            Duration::from_millis(100),
            wait_for_shutdown(async {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no signal handler"))
            }),
        )
        .await;
        assert!(result.is_err());
    }
}
