//! # Checkout API
//!
//! HTTP front for `checkout-core`.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout API Routes                             │
//! │                                                                         │
//! │  POST /api/checkout ──► checkout_service  ──► validate ──► calculate    │
//! │  GET  /health       ──► health_service    ──► JSON or HTML status       │
//! │  GET  /docs         ──► docs_service      ──► public/docs.html          │
//! │  GET  /*            ──► static_service    ──► public/ (browser form)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config::ApiConfig`]. Environment variables:
//! - `CHECKOUT_PORT` / `PORT` - HTTP port (default: 3000)
//! - `CHECKOUT_BIND_ADDR` - bind address (default: 0.0.0.0)
//! - `CHECKOUT_ENVIRONMENT` - `development` | `production`
//! - `CHECKOUT_LOG_LEVEL` - default log filter (default: info)
//! - `CHECKOUT_PUBLIC_DIR` - static files directory (default: public)

pub mod config;
pub mod error;
pub mod services;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state. Immutable after startup.
#[derive(Debug)]
pub struct AppState {
    pub config: ApiConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            config,
            started_at: Instant::now(),
        }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/checkout", post(services::checkout_service::checkout))
        .route("/health", get(services::health_service::health))
        .route("/docs", get(services::docs_service::docs))
        .fallback(services::static_service::serve_static)
        .with_state(state)
}
