// src/http/mod.rs
//! JSON-over-HTTP surface for the record store
//!
//! | Route               | Handler                     |
//! |---------------------|-----------------------------|
//! | `GET /todos`        | [`handlers::list_todos`]    |
//! | `POST /todos`       | [`handlers::create_todo`]   |
//! | `PUT /todos/{id}`   | [`handlers::update_todo`]   |
//! | `DELETE /todos/{id}`| [`handlers::delete_todo`]   |
//! | `GET /health`       | [`handlers::health`]        |

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::TodoStore;
use crate::identity::IdentityResolver;

pub use error::ApiError;

/// Shared application state
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(store: TodoStore, identity: impl IdentityResolver + 'static) -> Self {
        Self {
            store: Arc::new(store),
            identity: Arc::new(identity),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            axum::routing::put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    info!("todo server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
