// Server module - router assembly and startup
// Used by main.rs and by the integration tests

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::domain::{DomainError, KeyValueStore};
use crate::infrastructure::config::{Config, StoreBackend};
use crate::infrastructure::{AppState, MemoryStore, RedisStore};

/// Build the full application router around `state`
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(api::web_router(state.clone()))
        .nest("/api", api::api_router(state))
        .merge(api::docs_router())
        .nest_service(
            "/static",
            ServeDir::new(static_dir).not_found_service(api::web::not_found.into_service()),
        )
        .fallback(api::web::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Open the configured key-value store. Called once at startup; the handle
/// lives for the rest of the process.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KeyValueStore>, DomainError> {
    match config.store_backend {
        StoreBackend::Redis => {
            tracing::info!(
                "Connecting to Redis at {}:{}",
                config.redis_host,
                config.redis_port
            );
            let store = RedisStore::connect(&config.redis_url()).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Serve `app` on the configured address until the process stops
pub async fn serve(app: Router, config: &Config) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| format!("Failed to bind to {}:{}: {}", config.host, config.port, e))?;

    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| format!("Failed to read listen address: {}", e))?;
    tracing::info!("Catalog server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
