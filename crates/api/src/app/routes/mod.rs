use axum::{Router, routing::post};

pub mod system;
pub mod upload;

/// Router for the upload surface.
pub fn router() -> Router {
    Router::new().route("/upload", post(upload::upload))
}
