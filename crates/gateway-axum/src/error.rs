//! Axum-specific error types and mappings.
//!
//! Maps [`GatewayError`] to HTTP status codes and JSON response bodies.
//! Every gateway failure surfaces as 503; the `type` field tells the
//! kinds apart.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use gateway_core::GatewayError;
use serde::Serialize;
use thiserror::Error;

/// Seconds a client should wait before retrying an unavailable backend.
pub const RETRY_AFTER_SECS: &str = "5";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Backend not ready or unreachable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Backend answered with an error status.
    #[error("{message}")]
    BackendError {
        message: String,
        backend_status: u16,
    },

    /// Any other gateway failure.
    #[error("Gateway failure: {message}")]
    Gateway {
        message: String,
        error_type: &'static str,
    },
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let retry = matches!(self, Self::ServiceUnavailable(_));
        let (status, message, error_type, metadata) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            Self::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                msg,
                Some("BACKEND_UNAVAILABLE"),
                None,
            ),
            Self::BackendError {
                message,
                backend_status,
            } => (
                StatusCode::SERVICE_UNAVAILABLE,
                message,
                Some("BACKEND_ERROR"),
                Some(serde_json::json!({ "backendStatus": backend_status })),
            ),
            Self::Gateway {
                message,
                error_type,
            } => (StatusCode::SERVICE_UNAVAILABLE, message, Some(error_type), None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
            metadata,
        };

        let mut response = (status, axum::Json(body)).into_response();
        if retry {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SECS));
        }
        response
    }
}

impl From<GatewayError> for HttpError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::BackendUnavailable(msg) => Self::ServiceUnavailable(msg.clone()),
            GatewayError::BackendError { status, .. } => Self::BackendError {
                message: err.to_string(),
                backend_status: *status,
            },
            GatewayError::TemplateRenderFailure(_) => Self::Gateway {
                error_type: err.kind(),
                message: err.to_string(),
            },
        }
    }
}
