//! Backend readiness states.
//!
//! A readiness value is derived from a single probe of the backend's
//! inventory endpoint. It is recomputed on demand and never persisted.

use serde::{Deserialize, Serialize};

/// Message reported when the inventory lists no matching model.
pub(crate) const NO_MODEL_MESSAGE: &str = "No Gemma model found";

/// Message reported when the backend answers with a non-200 status.
pub(crate) const ERROR_MESSAGE: &str = "Ollama service not responding";

/// Message reported while the backend cannot be reached.
pub(crate) const LOADING_MESSAGE: &str = "Connecting to Ollama service...";

/// Readiness of the backend model runtime.
///
/// Serializes as `{"status": "ready", "model": "..."}` for the ready
/// state and `{"status": "<state>", "message": "..."}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadinessState {
    /// A matching model is loaded and can serve requests.
    Ready {
        /// Name of the first matching model in inventory order.
        model: String,
    },

    /// The backend is up but no matching model is installed.
    NoModel {
        /// Human-readable explanation.
        message: String,
    },

    /// The backend answered the inventory request with a non-200 status.
    Error {
        /// Human-readable explanation.
        message: String,
    },

    /// The backend could not be reached; assumed to still be starting.
    Loading {
        /// Human-readable explanation.
        message: String,
    },
}

impl ReadinessState {
    /// Ready with the given model name.
    pub fn ready(model: impl Into<String>) -> Self {
        Self::Ready {
            model: model.into(),
        }
    }

    pub fn no_model() -> Self {
        Self::NoModel {
            message: NO_MODEL_MESSAGE.to_string(),
        }
    }

    pub fn error() -> Self {
        Self::Error {
            message: ERROR_MESSAGE.to_string(),
        }
    }

    pub fn loading() -> Self {
        Self::Loading {
            message: LOADING_MESSAGE.to_string(),
        }
    }

    /// Check if the backend can take generation requests.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Name of the ready model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Ready { model } => Some(model),
            _ => None,
        }
    }

    /// Stable wire name of the state (`ready`, `no_model`, `error`, `loading`).
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::NoModel { .. } => "no_model",
            Self::Error { .. } => "error",
            Self::Loading { .. } => "loading",
        }
    }
}
