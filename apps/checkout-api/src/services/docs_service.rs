//! `GET /docs`: serves `docs.html` from the public directory.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// File name of the documentation page inside `public_dir`.
pub const DOCS_FILE: &str = "docs.html";

/// Docs handler.
pub async fn docs(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let path = state.config.public_dir.join(DOCS_FILE);
    info!(path = %path.display(), "Serving documentation");

    let page = tokio::fs::read_to_string(&path).await.map_err(|e| {
        ApiError::internal_with_message(
            "Error serving documentation",
            format!("{}: {}", path.display(), e),
        )
    })?;

    Ok(Html(page))
}
