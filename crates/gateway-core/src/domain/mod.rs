//! Domain types shared by the probe, the forwarder and the HTTP layer.

mod chat;
mod model;
mod readiness;

pub use chat::{BackendReply, ChatRequest, ForwardMethod, GenerateRequest};
pub use model::{ModelDescriptor, select_model};
pub use readiness::ReadinessState;
