//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent plain-text error responses

use std::sync::Arc;

use axum::{Extension, Router, extract::DefaultBodyLimit, routing::get};
use tower::ServiceBuilder;

use restock_transfer::TransferConfig;

use crate::config::ApiConfig;
use crate::middleware;

pub mod errors;
pub mod routes;

/// State shared by all handlers. Read-only: runs keep nothing between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub transfer: TransferConfig,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let state = Arc::new(AppState {
        transfer: config.transfer,
    });

    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(DefaultBodyLimit::max(config.max_upload_bytes))
                .layer(Extension(state)),
        )
}
