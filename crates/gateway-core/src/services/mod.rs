//! Core services.
//!
//! Services orchestrate between the backend port and domain logic. They
//! don't know about concrete HTTP clients or servers.

mod forwarder;
mod probe;

pub use forwarder::{Forwarded, PromptForwarder};
pub use probe::BackendProbe;

#[cfg(test)]
pub(crate) mod testing;
