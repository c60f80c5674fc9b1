//! Core domain types, ports and services for the gemma gateway.
//!
//! This crate knows nothing about HTTP servers or HTTP clients. The
//! backend is reached through [`ports::ModelBackendPort`]; adapters such as
//! `gateway-ollama` implement it and `gateway-axum` exposes the services.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    BackendReply, ChatRequest, ForwardMethod, GenerateRequest, ModelDescriptor, ReadinessState,
    select_model,
};
pub use error::GatewayError;
pub use ports::{BackendCallError, GenerateCall, ModelBackendPort};
pub use prompt::{DEFAULT_TEMPLATE, PromptTemplate, QUESTION_PLACEHOLDER};
pub use services::{BackendProbe, Forwarded, PromptForwarder};
pub use settings::{
    DEFAULT_BACKEND_URL, DEFAULT_GENERATE_TIMEOUT_SECS, DEFAULT_MODEL, DEFAULT_MODEL_FILTER,
    DEFAULT_PROBE_TIMEOUT_SECS, GatewaySettings, SettingsError,
};
