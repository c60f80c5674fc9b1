//! Ollama adapter for the gateway's backend port.
//!
//! [`OllamaClient`] implements [`gateway_core::ModelBackendPort`] against
//! the Ollama HTTP API: `GET /api/tags` for the inventory and
//! `POST /api/generate` for non-streaming generation.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;

pub mod client;
pub mod models;

pub use client::OllamaClient;
pub use models::{GENERATE_PATH, TAGS_PATH, TagsResponse};
