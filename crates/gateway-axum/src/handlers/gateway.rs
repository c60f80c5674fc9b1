//! Gateway handlers - readiness and prompt forwarding.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use gateway_core::{BackendReply, ChatRequest, GenerateRequest, ReadinessState};
use serde_json::Value;
use tracing::debug;

use super::parse_body;
use crate::error::HttpError;
use crate::state::AppState;

/// Report backend readiness. Always 200; failures are encoded in the body.
pub async fn status(State(state): State<AppState>) -> Json<ReadinessState> {
    let readiness = state.probe.probe().await;
    debug!(status = readiness.status_str(), "Readiness probed");
    Json(readiness)
}

/// Forward a raw prompt and return the backend reply augmented with
/// `model` and `method`.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, HttpError> {
    let req: GenerateRequest = parse_body(&body)?;
    debug!(prompt_len = req.prompt.len(), "Generate request");

    let forwarded = state.forwarder.forward(&req.prompt, false).await?;
    Ok(Json(forwarded.into_body()))
}

/// Forward a chat message, optionally through the prompt template.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BackendReply>, HttpError> {
    let req: ChatRequest = parse_body(&body)?;
    debug!(
        message_len = req.message.len(),
        use_template = req.use_template,
        "Chat request"
    );

    let forwarded = state
        .forwarder
        .forward(&req.message, req.use_template)
        .await?;
    Ok(Json(forwarded.reply))
}
