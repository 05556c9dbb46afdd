//! Process shutdown signal

use tracing::{info, warn};

/// Resolves once the process is asked to stop: Ctrl+C, or SIGTERM on unix.
///
/// A handler that cannot be installed never fires; the other one still does.
pub async fn shutdown_signal() {
    let source = tokio::select! {
        source = interrupt() => source,
        source = terminate() => source,
    };
    info!("{} received, stopping health monitoring", source);
}

async fn interrupt() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Ctrl+C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
    "Ctrl+C"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("SIGTERM handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    }
    "SIGTERM"
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending().await
}
