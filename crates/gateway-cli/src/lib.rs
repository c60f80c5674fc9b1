//! Command-line adapter for the gemma gateway.
//!
//! `gemma-gateway serve` runs the HTTP gateway; `gemma-gateway smoke`
//! exercises a running one end to end.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by the smoke integration test
#[cfg(test)]
use axum as _;

// Used by the binary only
use dotenvy as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
