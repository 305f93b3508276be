//! Bind and serve until shutdown.

use crate::config::ServerConfig;
use crate::error::AppResult;
use crate::routes::{PHASE_CHANGE_DIAGRAM_PATH, router};
use pl_phase::{Phase, PhaseDiagram};
use std::sync::Arc;

pub async fn serve(config: &ServerConfig, diagram: PhaseDiagram) -> AppResult<()> {
    for phase in Phase::ALL {
        let model = diagram.model(phase);
        tracing::info!(
            "{} line: slope = {:.6}, intercept = {:.6}",
            phase,
            model.slope(),
            model.intercept()
        );
    }

    let app = router(Arc::new(diagram));
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Serving http://{}{}",
        listener.local_addr()?,
        PHASE_CHANGE_DIAGRAM_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
