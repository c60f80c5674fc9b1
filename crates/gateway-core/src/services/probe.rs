//! Backend readiness probe.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{ReadinessState, select_model};
use crate::error::GatewayError;
use crate::ports::{BackendCallError, ModelBackendPort};
use crate::settings::GatewaySettings;

/// Last positive probe result.
#[derive(Debug, Clone)]
struct CachedReady {
    model: String,
    at: Instant,
}

/// Classifies backend readiness from its model inventory.
///
/// `probe` always asks the backend. `ensure_ready` may reuse a recent
/// positive result when a readiness TTL is configured; negative results
/// are never reused.
#[derive(Debug)]
pub struct BackendProbe {
    backend: Arc<dyn ModelBackendPort>,
    model_filter: String,
    ttl: Option<Duration>,
    last_ready: RwLock<Option<CachedReady>>,
}

impl BackendProbe {
    pub fn new(backend: Arc<dyn ModelBackendPort>, settings: &GatewaySettings) -> Self {
        Self {
            backend,
            model_filter: settings.model_filter.clone(),
            ttl: settings.readiness_ttl(),
            last_ready: RwLock::new(None),
        }
    }

    /// Query the backend inventory and classify readiness.
    ///
    /// Never fails: every failure path degrades into a non-ready state.
    pub async fn probe(&self) -> ReadinessState {
        let state = match self.backend.list_models().await {
            Ok(models) => match select_model(&models, &self.model_filter) {
                Some(found) => ReadinessState::ready(found.name.clone()),
                None => {
                    debug!(
                        filter = %self.model_filter,
                        installed = models.len(),
                        "No matching model in backend inventory"
                    );
                    ReadinessState::no_model()
                }
            },
            Err(BackendCallError::Status { status, .. }) => {
                warn!(status, "Backend inventory request failed");
                ReadinessState::error()
            }
            Err(err @ (BackendCallError::Unreachable(_) | BackendCallError::InvalidResponse(_))) => {
                debug!("Backend not reachable yet: {err}");
                ReadinessState::loading()
            }
        };

        self.remember(&state).await;
        state
    }

    /// Resolve the ready model name or fail with `BackendUnavailable`.
    pub async fn ensure_ready(&self) -> Result<String, GatewayError> {
        if let Some(model) = self.cached_model().await {
            debug!(model = %model, "Reusing cached readiness");
            return Ok(model);
        }

        match self.probe().await {
            ReadinessState::Ready { model } => Ok(model),
            other => {
                debug!(status = other.status_str(), "Backend not ready");
                Err(GatewayError::not_ready())
            }
        }
    }

    async fn cached_model(&self) -> Option<String> {
        let ttl = self.ttl?;
        let guard = self.last_ready.read().await;
        guard
            .as_ref()
            .filter(|cached| cached.at.elapsed() < ttl)
            .map(|cached| cached.model.clone())
    }

    async fn remember(&self, state: &ReadinessState) {
        if self.ttl.is_none() {
            return;
        }
        let mut guard = self.last_ready.write().await;
        *guard = state.model().map(|model| CachedReady {
            model: model.to_string(),
            at: Instant::now(),
        });
    }
}
