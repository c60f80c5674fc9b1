//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no transport details and use only domain types.

pub mod model_backend;

pub use model_backend::{BackendCallError, GenerateCall, ModelBackendPort};
