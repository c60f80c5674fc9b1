//! Prompt forwarding.
//!
//! Every forward is gated on a readiness check; the backend's generate
//! endpoint is never called while the probe reports anything but ready.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::{BackendReply, ForwardMethod};
use crate::error::GatewayError;
use crate::ports::{GenerateCall, ModelBackendPort};
use crate::prompt::PromptTemplate;
use crate::services::BackendProbe;
use crate::settings::GatewaySettings;

/// Result of a successful forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Forwarded {
    /// Backend JSON object, augmented with `model` and `method`.
    pub body: Map<String, Value>,
    /// Typed view over the consumed fields.
    pub reply: BackendReply,
}

impl Forwarded {
    /// The augmented backend body as a JSON value.
    pub fn into_body(self) -> Value {
        Value::Object(self.body)
    }
}

/// Relays prompts to the backend, directly or through the prompt template.
#[derive(Debug)]
pub struct PromptForwarder {
    backend: Arc<dyn ModelBackendPort>,
    probe: Arc<BackendProbe>,
    template: PromptTemplate,
    model: String,
}

impl PromptForwarder {
    pub fn new(
        backend: Arc<dyn ModelBackendPort>,
        probe: Arc<BackendProbe>,
        template: PromptTemplate,
        settings: &GatewaySettings,
    ) -> Self {
        Self {
            backend,
            probe,
            template,
            model: settings.model.clone(),
        }
    }

    /// Model tag sent with every generate call.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Forward `prompt` to the backend.
    ///
    /// With `use_template` the prompt is rendered into the template first
    /// and the reply text is trimmed.
    pub async fn forward(&self, prompt: &str, use_template: bool) -> Result<Forwarded, GatewayError> {
        self.probe.ensure_ready().await?;

        let method = if use_template {
            ForwardMethod::Templated
        } else {
            ForwardMethod::Direct
        };
        let rendered = match method {
            ForwardMethod::Templated => self.template.render(prompt),
            ForwardMethod::Direct => prompt.to_string(),
        };

        info!(
            model = %self.model,
            method = method.as_str(),
            prompt_len = rendered.len(),
            "Forwarding prompt to backend"
        );

        let call = GenerateCall::new(self.model.clone(), rendered);
        let mut body = self.backend.generate(&call).await.map_err(|e| {
            warn!(method = method.as_str(), "Backend generate failed: {e}");
            GatewayError::from(e)
        })?;

        let text = body
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let response = match method {
            ForwardMethod::Templated => text.trim().to_string(),
            ForwardMethod::Direct => text.to_string(),
        };

        body.entry("model")
            .or_insert_with(|| Value::String(self.model.clone()));
        body.insert("method".to_string(), Value::String(method.as_str().to_string()));

        Ok(Forwarded {
            body,
            reply: BackendReply {
                response,
                model: self.model.clone(),
                method,
            },
        })
    }
}
