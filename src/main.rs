use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tokio::sync::watch;

use company_service::{app, config, middleware, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = config::Settings::new()?;

    middleware::logging::init_logging(&settings.log_level, &settings.log_format);

    tracing::info!("Starting company service v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http_port));
    let shutdown_timeout = Duration::from_secs(settings.http_shutdown_timeout_seconds);

    let app_state = AppState::new(settings).await?;
    let router = app::create_router(app_state);

    tracing::info!("Server starting on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // The stop signal flips the watch channel so the drain deadline only
    // starts counting once shutdown has actually begun.
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let drain_deadline = async move {
        while !*shutdown_rx.borrow_and_update() {
            if shutdown_rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server shutdown complete");
        }
        _ = drain_deadline => {
            tracing::warn!(
                timeout_seconds = shutdown_timeout.as_secs(),
                "Graceful shutdown timed out, dropping in-flight requests"
            );
        }
    }

    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
