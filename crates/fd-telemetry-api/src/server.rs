//! Listener lifecycle: bind, serve, shut down.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

use crate::config::ServiceConfig;
use crate::error::ServerError;

/// Bind the configured address. No retry: a taken port is fatal.
pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_addr();
    let bound = TcpListener::bind(&addr).await;
    bound.map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C / SIGINT, or SIGTERM on Unix.
///
/// The SIGTERM handler is registered when this is called, not when the
/// returned future is first polled. Must be called inside a Tokio runtime.
pub fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    #[cfg(unix)]
    let terminate = signal(SignalKind::terminate());

    async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to install Ctrl-C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            match terminate {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => tracing::info!(signal = "SIGINT", "shutdown signal received"),
            () = terminate => tracing::info!(signal = "SIGTERM", "shutdown signal received"),
        }
    }
}
