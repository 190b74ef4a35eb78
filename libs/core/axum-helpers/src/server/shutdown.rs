//! Shutdown signal handling.

use tracing::info;

/// Completes when SIGINT (Ctrl+C) or SIGTERM is received.
///
/// Used with `axum::serve(...).with_graceful_shutdown(...)` so Kubernetes
/// pod termination drains in-flight requests instead of dropping them.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
