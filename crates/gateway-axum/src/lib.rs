//! Axum web adapter for the gemma gateway.
//!
//! Exposes the readiness probe and the prompt forwarder over HTTP:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`handlers::pages::index`] |
//! | GET | `/health` | [`handlers::pages::health`] |
//! | GET | `/status` | [`handlers::gateway::status`] |
//! | POST | `/generate` | [`handlers::gateway::generate`] |
//! | POST | `/chat` | [`handlers::gateway::chat`] |
//! | GET | `/static/*` | files from the static directory |

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by the integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
