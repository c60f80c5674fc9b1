//! Model backend port.
//!
//! This port defines the two calls the gateway makes against the
//! model-serving process: listing its inventory and generating a
//! completion. Timeouts are the implementation's responsibility.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::domain::ModelDescriptor;

/// Body of a non-streaming generate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCall {
    /// Model tag to run.
    pub model: String,
    /// Fully rendered prompt.
    pub prompt: String,
    /// Always `false`; token streaming is not supported.
    pub stream: bool,
}

impl GenerateCall {
    /// Non-streaming call for `model` with `prompt`.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Errors raised by a backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendCallError {
    /// Connection refused, DNS failure or timeout.
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-200 status.
    #[error("Backend returned status {status}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The backend answered 200 with a body that could not be decoded.
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Port for talking to the model-serving process.
#[async_trait]
pub trait ModelBackendPort: Send + Sync + fmt::Debug {
    /// List the models installed in the backend, in backend order.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, BackendCallError>;

    /// Run a non-streaming generation.
    ///
    /// Returns the decoded JSON object as-is; callers pick the fields
    /// they need.
    async fn generate(&self, call: &GenerateCall) -> Result<Map<String, Value>, BackendCallError>;
}
