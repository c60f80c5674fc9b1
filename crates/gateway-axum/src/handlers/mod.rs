//! HTTP request handlers for the gateway.
//!
//! Handlers are thin wrappers that delegate to the probe and the forwarder.

pub mod gateway;
pub mod pages;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Decode a JSON request body, reporting malformed input as 400.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, HttpError> {
    serde_json::from_slice(body).map_err(|e| HttpError::BadRequest(format!("Invalid JSON: {e}")))
}
