//! `GET /health`.
//!
//! Browsers get a small HTML status page; monitors asking for JSON
//! (`?format=json`, or an `Accept` header with `application/json` and without
//! `text/html`) get a [`HealthReport`].

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Status string reported while the process is serving.
const STATUS_HEALTHY: &str = "healthy";

/// Status string for each sub-check.
const CHECK_OPERATIONAL: &str = "operational";

/// Query parameters accepted by `/health`.
#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    pub format: Option<String>,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub uptime_formatted: String,
    pub environment: String,
    pub service: String,
    pub version: String,
    pub platform: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub server: String,
    pub api: String,
}

impl HealthReport {
    /// Builds a report for the running process.
    pub fn from_state(state: &AppState) -> Self {
        let uptime = state.started_at.elapsed().as_secs();

        HealthReport {
            status: STATUS_HEALTHY.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            uptime,
            uptime_formatted: format_uptime(uptime),
            environment: state.config.environment.to_string(),
            service: state.config.service_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
            checks: HealthChecks {
                server: CHECK_OPERATIONAL.to_string(),
                api: CHECK_OPERATIONAL.to_string(),
            },
        }
    }
}

/// Health handler.
pub async fn health(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HealthQuery>,
    headers: HeaderMap,
) -> Response {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    let report = HealthReport::from_state(&state);

    if wants_json(query.format.as_deref(), accept) {
        Json(report).into_response()
    } else {
        Html(render_html(&report)).into_response()
    }
}

/// Decides between the JSON and HTML representations.
pub fn wants_json(format: Option<&str>, accept: Option<&str>) -> bool {
    if format.is_some_and(|f| f.eq_ignore_ascii_case("json")) {
        return true;
    }

    accept.is_some_and(|a| a.contains("application/json") && !a.contains("text/html"))
}

/// Formats an uptime in seconds, dropping leading zero units.
///
/// ```text
/// 42      → "42s"
/// 125     → "2m 5s"
/// 3725    → "1h 2m 5s"
/// 90061   → "1d 1h 1m"
/// ```
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

fn render_html(report: &HealthReport) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{service} - Health</title>
  <link rel="stylesheet" href="/styles.css">
</head>
<body>
  <main class="card">
    <h1>{service}</h1>
    <p class="status">Status: <strong>{status}</strong></p>
    <dl>
      <dt>Uptime</dt><dd>{uptime}</dd>
      <dt>Environment</dt><dd>{environment}</dd>
      <dt>Version</dt><dd>{version}</dd>
      <dt>Checked at</dt><dd>{timestamp}</dd>
    </dl>
    <p><a href="/health?format=json">JSON</a> · <a href="/">Checkout</a></p>
  </main>
</body>
</html>
"#,
        service = escape_html(&report.service),
        status = escape_html(&report.status),
        uptime = escape_html(&report.uptime_formatted),
        environment = escape_html(&report.environment),
        version = escape_html(&report.version),
        timestamp = escape_html(&report.timestamp),
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use axum::http::{HeaderValue, StatusCode};

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(ApiConfig::default()))
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3_725), "1h 2m 5s");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn test_wants_json() {
        assert!(wants_json(Some("json"), None));
        assert!(wants_json(None, Some("application/json")));
        assert!(!wants_json(None, Some("text/html,application/json")));
        assert!(!wants_json(None, None));
        assert!(!wants_json(Some("html"), None));
    }

    #[tokio::test]
    async fn test_health_json() {
        let response = health(
            State(state()),
            Query(HealthQuery {
                format: Some("json".to_string()),
            }),
            HeaderMap::new(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "development");
        assert_eq!(body["service"], "Checkout API");
        assert_eq!(body["checks"]["api"], "operational");
        assert!(body["uptimeFormatted"].is_string());
    }

    #[tokio::test]
    async fn test_health_html_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));

        let response = health(State(state()), Query(HealthQuery::default()), headers).await;

        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<strong>healthy</strong>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a & b>"), "&lt;a &amp; b&gt;");
    }
}
