//! `POST /api/checkout`.
//!
//! ```text
//! body bytes ──► JSON value ──► validate_checkout_payload ──► calculate_checkout
//!      │              │                    │                          │
//!      │         400 malformed        400 + reason             500 if non-finite
//!      ▼
//!  empty body is treated as a missing payload
//! ```
//!
//! Each request gets a UUID carried on the `checkout` span so the outcome log
//! line can be tied back to it.

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::Json;
use checkout_core::money::format_amount;
use checkout_core::{calculate_checkout, validate_checkout_payload, CheckoutResult};
use serde_json::Value;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::error::ApiError;

/// Checkout handler.
pub async fn checkout(body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("checkout", %request_id);

    span.in_scope(|| match process_checkout(&body) {
        Ok(result) => Json(result).into_response(),
        Err(err) => err.into_response(),
    })
}

/// Parses, validates and calculates. Pure apart from logging.
pub fn process_checkout(body: &[u8]) -> Result<CheckoutResult, ApiError> {
    let payload = parse_body(body)?;
    let request = validate_checkout_payload(&payload)?;
    let result = calculate_checkout(&request);

    if !result.is_finite() {
        return Err(ApiError::internal(format!(
            "non-finite checkout result for {} items: {:?}",
            request.items.len(),
            result
        )));
    }

    info!(
        item_count = request.items.len(),
        total_before_tax = %format_amount(result.total_before_tax),
        total = %format_amount(result.total),
        "Checkout computed"
    );

    Ok(result)
}

/// Decodes the request body. An empty body becomes `null` so validation
/// reports it as a missing payload.
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| ApiError::MalformedJson(e.to_string()))
}
