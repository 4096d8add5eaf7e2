//! Error types for the Checkout API.
//!
//! Every failure leaves the server as JSON: `{ "error": "<message>" }`.
//!
//! ```text
//! ValidationError ──► ApiError::Validation ──► 400 + reason          (warn)
//! bad JSON body   ──► ApiError::MalformedJson ──► 400 + parser detail (warn)
//! unknown path    ──► ApiError::NotFound ──► 404
//! anything else   ──► ApiError::Internal ──► 500 + generic message   (error)
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use checkout_core::ValidationError;
use serde::Serialize;
use tracing::{error, warn};

/// Message sent to clients for every 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Checkout API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("Not found")]
    NotFound,

    /// `public_message` goes to the client, `detail` only to the log.
    #[error("Internal error: {detail}")]
    Internal {
        public_message: String,
        detail: String,
    },
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// Creates an internal error with the generic client message.
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal {
            public_message: INTERNAL_ERROR_MESSAGE.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates an internal error with a client message of its own.
    pub fn internal_with_message(
        public_message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        ApiError::Internal {
            public_message: public_message.into(),
            detail: detail.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the client.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Internal { public_message, .. } => public_message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Validation(_) | ApiError::MalformedJson(_) => {
                warn!(status = status.as_u16(), message = %self, "Request rejected");
            }
            ApiError::Internal { detail, .. } => {
                error!(status = status.as_u16(), detail = %detail, "Unhandled error");
            }
            ApiError::NotFound => {}
        }

        let body = ErrorBody {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}
