//! # Checkout API
//!
//! HTTP server for checkout calculations.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout API Server                              │
//! │                                                                         │
//! │  Browser ───► HTTP (3000) ───► services ───► checkout-core             │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                               public/                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout_api::config::{ApiConfig, RunEnvironment};
use checkout_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(&config);

    info!(
        environment = %config.environment,
        public_dir = %config.public_dir.display(),
        "Configuration loaded"
    );

    // Build server address
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!(%addr, "Server started");
    info!("Documentation available at: http://{}/docs", addr);
    info!("Health check available at: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.environment {
        RunEnvironment::Development => builder.pretty().init(),
        RunEnvironment::Production => builder.json().init(),
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
