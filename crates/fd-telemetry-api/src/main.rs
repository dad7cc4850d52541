//! Flightdeck telemetry service: serves simulated flight telemetry as JSON.

use anyhow::Context;

use fd_telemetry_api::config::ServiceConfig;
use fd_telemetry_api::logging;
use fd_telemetry_api::routes;
use fd_telemetry_api::server;
use fd_telemetry_api::state::AppState;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "fd-telemetry-api failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fd-telemetry-api starting");

    let config = ServiceConfig::from_env().context("loading configuration")?;
    let identity = config.identity();
    tracing::info!(
        node_name = %identity.node_name,
        app_version = %identity.version,
        "config loaded"
    );

    let app = routes::build_router(AppState::new(identity));

    let listener = server::bind(&config).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        port = config.port,
        version = env!("CARGO_PKG_VERSION"),
        "telemetry service active"
    );

    server::serve(listener, app, server::shutdown_signal()).await?;

    tracing::info!("fd-telemetry-api stopped");
    Ok(())
}
