//! reqwest-based Ollama client.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use gateway_core::{
    BackendCallError, GatewaySettings, GenerateCall, ModelBackendPort, ModelDescriptor,
    settings::normalize_base_url,
};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::models::{GENERATE_PATH, TAGS_PATH, TagsResponse};

/// HTTP client for a single Ollama instance.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    probe_timeout: Duration,
    generate_timeout: Duration,
}

impl OllamaClient {
    /// Create a client for the backend described by `settings`.
    pub fn new(settings: &GatewaySettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().pool_max_idle_per_host(10).build()?;
        Ok(Self::with_client(client, settings))
    }

    /// Create a client reusing an existing connection pool.
    pub fn with_client(client: Client, settings: &GatewaySettings) -> Self {
        Self {
            client,
            base_url: normalize_base_url(&settings.backend_url),
            probe_timeout: settings.probe_timeout(),
            generate_timeout: settings.generate_timeout(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ModelBackendPort for OllamaClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, BackendCallError> {
        let url = self.url(TAGS_PATH);
        debug!(url = %url, "Probing backend inventory");

        let response = self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(transport_error)?;
        let bytes = read_ok_body(response).await?;

        let tags: TagsResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to parse backend inventory: {e}");
            BackendCallError::InvalidResponse(e.to_string())
        })?;
        Ok(tags.models)
    }

    async fn generate(&self, call: &GenerateCall) -> Result<Map<String, Value>, BackendCallError> {
        let url = self.url(GENERATE_PATH);
        debug!(url = %url, model = %call.model, "Sending generate request");

        let response = self
            .client
            .post(&url)
            .timeout(self.generate_timeout)
            .json(call)
            .send()
            .await
            .map_err(transport_error)?;
        let bytes = read_ok_body(response).await?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(BackendCallError::InvalidResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => {
                error!("Failed to parse generate response: {e}");
                Err(BackendCallError::InvalidResponse(e.to_string()))
            }
        }
    }
}

/// Map a send/receive failure to `Unreachable`.
fn transport_error(err: reqwest::Error) -> BackendCallError {
    debug!(timeout = err.is_timeout(), connect = err.is_connect(), "Backend request failed: {err}");
    BackendCallError::Unreachable(err.to_string())
}

/// Read the body of a 200 response, or turn any other status into an error.
async fn read_ok_body(response: Response) -> Result<Bytes, BackendCallError> {
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendCallError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response.bytes().await.map_err(transport_error)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
