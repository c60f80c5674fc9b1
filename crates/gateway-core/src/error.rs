//! Gateway error taxonomy.
//!
//! Every failure the gateway can report to a client is one of these
//! variants. The HTTP layer maps all of them to 503.

use thiserror::Error;

use crate::ports::BackendCallError;

/// Message used when forwarding is refused because the backend is not ready.
pub const MODEL_NOT_READY: &str = "Model not ready";

/// Errors produced by the probe and forwarder services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Backend not ready, unreachable or timed out.
    #[error("Service unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend answered with an error status.
    #[error("Error from Ollama service (status {status}): {message}")]
    BackendError {
        /// Status code reported by the backend.
        status: u16,
        /// Human-readable detail.
        message: String,
    },

    /// The prompt template could not be rendered.
    #[error("Template render failure: {0}")]
    TemplateRenderFailure(String),
}

impl GatewayError {
    /// The backend is not ready to take generation requests.
    #[must_use]
    pub fn not_ready() -> Self {
        Self::BackendUnavailable(MODEL_NOT_READY.to_string())
    }

    /// Backend status code, when the backend itself reported the failure.
    #[must_use]
    pub const fn backend_status(&self) -> Option<u16> {
        match self {
            Self::BackendError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error indicates a temporary condition
    /// where retrying may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }

    /// Stable error type discriminant for client-side handling.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::BackendError { .. } => "BACKEND_ERROR",
            Self::TemplateRenderFailure(_) => "TEMPLATE_RENDER_FAILURE",
        }
    }
}

impl From<BackendCallError> for GatewayError {
    fn from(err: BackendCallError) -> Self {
        match err {
            BackendCallError::Unreachable(msg) => Self::BackendUnavailable(msg),
            BackendCallError::Status { status, body } => Self::BackendError {
                status,
                message: if body.trim().is_empty() {
                    "Error from Ollama service".to_string()
                } else {
                    body
                },
            },
            BackendCallError::InvalidResponse(msg) => Self::BackendError {
                status: 502,
                message: format!("invalid backend response: {msg}"),
            },
        }
    }
}
