mod analysis;
mod auth;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{AnalysisRepository, MemoryStore, PgStore, UserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let (users, analyses) = match &config.database_url {
        Some(url) => repositories(Arc::new(PgStore::connect(url).await?)),
        None => {
            info!("DATABASE_URL not set; users and history are kept in memory");
            repositories(Arc::new(MemoryStore::new()))
        }
    };

    let state = AppState::new(config.clone(), users, analyses)?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Splits one store into the two repository handles `AppState` expects.
fn repositories<S>(store: Arc<S>) -> (Arc<dyn UserRepository>, Arc<dyn AnalysisRepository>)
where
    S: UserRepository + AnalysisRepository + 'static,
{
    let users: Arc<dyn UserRepository> = store.clone();
    let analyses: Arc<dyn AnalysisRepository> = store;
    (users, analyses)
}
