//! HTTP API: upload page, upload endpoint, and the server bootstrap pieces.

pub mod app;
pub mod config;
pub mod middleware;

pub use config::ApiConfig;
