//! Static file fallback for the browser form.
//!
//! Any request no other route claimed lands here. `GET`/`HEAD` requests are
//! resolved inside `public_dir`; directories map to their `index.html`.
//! Only plain path segments are accepted, so `..` can never climb out of the
//! public directory.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Method, Uri};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Served for `/` and for any directory path.
pub const INDEX_FILE: &str = "index.html";

/// Static file handler.
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound);
    }

    let mut path = resolve_path(&state.config.public_dir, uri.path()).ok_or(ApiError::NotFound)?;

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => path.push(INDEX_FILE),
        Ok(_) => {}
        Err(_) => return Err(ApiError::NotFound),
    }

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ApiError::NotFound),
        Err(e) => {
            return Err(ApiError::internal(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    debug!(path = %path.display(), bytes = bytes.len(), "Serving static file");
    Ok(([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response())
}

/// Maps a request path onto `root`, or `None` if it tries to leave it.
pub fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join(INDEX_FILE));
    }

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            _ => return None,
        }
    }

    Some(resolved)
}

/// Content type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
