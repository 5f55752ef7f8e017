use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::pool;
use movie_catalog::infrastructure::store::{MemoryStore, PgStore, Store};
use movie_catalog::state::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::from_env();

    let store: Arc<dyn Store> = match config.database_url.as_deref() {
        Some(url) => {
            let db = pool::connect_to_db(url, config.database_max_connections)
                .await
                .context("failed to connect to PostgreSQL")?;
            pool::run_migrations(&db)
                .await
                .context("failed to run database migrations")?;
            Arc::new(PgStore::new(db))
        }
        None => {
            warn!("DATABASE_URL is not set, using the in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let address = config.bind_address();
    let app = movie_catalog::app::create_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
