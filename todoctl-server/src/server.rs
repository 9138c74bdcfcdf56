//! Main server module - Axum setup and router configuration
//!
//! Starts an HTTP server with the todo CRUD routes and a health endpoint.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::db::Database;
use crate::error::ServerResult;
use crate::routes;

/// Server configuration resolved by the caller
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// SQLite database file path
    pub db_path: PathBuf,
}

/// Run the server with the given configuration
pub async fn run_server(config: ServerConfig) -> ServerResult<()> {
    info!("Opening database at {}", config.db_path.display());
    let db = Database::open(&config.db_path)?;

    // Build router
    let app = create_router(db);

    info!("Starting todoctl-server on http://{}", config.bind_addr);

    // Create listener
    let listener = TcpListener::bind(config.bind_addr).await?;

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with all routes
pub fn create_router(db: Database) -> Router {
    // CORS layer open to any origin, for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Middleware stack
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Build routes
    Router::new()
        // Health
        .route("/health", get(routes::health_check))
        // Todos
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            put(routes::toggle_todo).delete(routes::delete_todo),
        )
        // State
        .with_state(db)
        .layer(middleware)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
