//! HTTP/JSON service exposing CRUD over an in-memory todo collection.
//!
//! # Design
//! - Store state lives in an `AppState` handed to the router, never in a
//!   process-wide global, so tests build a fresh app per case.
//! - Only one error reaches callers: a missing id, rendered as
//!   404 `{"error":"Todo not found"}`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;
pub mod telemetry;

use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;

pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use handlers::AppState;
pub use store::{IdGenerator, StoreError, Todo, TodoStore, UuidGenerator};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(state)
        .layer(from_fn(middleware::cors))
        .layer(from_fn(middleware::log_requests))
}

/// Serve until the listener fails or Ctrl-C is received.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
