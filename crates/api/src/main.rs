use anyhow::Context;

use restock_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    restock_observability::init();

    let config = ApiConfig::from_env()?;
    tracing::info!(
        rf_surplus_cap_fraction = config.transfer.rf_surplus_cap_fraction(),
        max_upload_bytes = config.max_upload_bytes,
        "configuration loaded"
    );

    let app = restock_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
