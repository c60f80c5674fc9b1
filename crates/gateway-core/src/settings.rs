//! Gateway settings and validation.
//!
//! Settings are built once at startup and shared immutably; nothing
//! reads process-wide globals after bootstrap.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base URL of the model-serving process.
pub const DEFAULT_BACKEND_URL: &str = "http://ollama:11434";

/// Model tag used for every generate call.
pub const DEFAULT_MODEL: &str = "gemma2:2b";

/// Substring a model name must contain to count as ready.
pub const DEFAULT_MODEL_FILTER: &str = "gemma";

/// Timeout for the inventory probe.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Timeout for a generate call.
pub const DEFAULT_GENERATE_TIMEOUT_SECS: u64 = 60;

/// Settings validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("backend URL must not be empty")]
    EmptyBackendUrl,

    #[error("backend URL must start with http:// or https://: {0}")]
    InvalidBackendUrl(String),

    #[error("model name must not be empty")]
    EmptyModel,

    #[error("model filter must not be empty")]
    EmptyModelFilter,

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Immutable gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Base URL of the backend, without trailing slash.
    pub backend_url: String,

    /// Model tag sent with every generate call.
    pub model: String,

    /// Substring used to pick a ready model from the inventory.
    pub model_filter: String,

    /// Seconds before the inventory probe gives up.
    pub probe_timeout_secs: u64,

    /// Seconds before a generate call gives up.
    pub generate_timeout_secs: u64,

    /// Seconds a positive readiness result may be reused by the forwarder.
    /// `0` re-probes before every forward.
    pub readiness_ttl_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            model_filter: DEFAULT_MODEL_FILTER.to_string(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            generate_timeout_secs: DEFAULT_GENERATE_TIMEOUT_SECS,
            readiness_ttl_secs: 0,
        }
    }
}

impl GatewaySettings {
    /// Settings pointing at `backend_url`, everything else default.
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: normalize_base_url(&backend_url.into()),
            ..Self::default()
        }
    }

    /// Check the settings for values the gateway cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = self.backend_url.trim();
        if url.is_empty() {
            return Err(SettingsError::EmptyBackendUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidBackendUrl(url.to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(SettingsError::EmptyModel);
        }
        if self.model_filter.is_empty() {
            return Err(SettingsError::EmptyModelFilter);
        }
        if self.probe_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout("probe"));
        }
        if self.generate_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout("generate"));
        }
        Ok(())
    }

    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    #[must_use]
    pub const fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    /// Readiness cache lifetime, `None` when caching is disabled.
    #[must_use]
    pub const fn readiness_ttl(&self) -> Option<Duration> {
        if self.readiness_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.readiness_ttl_secs))
        }
    }
}

/// Strip trailing slashes so endpoint paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_conventions() {
        let settings = GatewaySettings::default();
        assert_eq!(settings.backend_url, "http://ollama:11434");
        assert_eq!(settings.model, "gemma2:2b");
        assert_eq!(settings.model_filter, "gemma");
        assert_eq!(settings.probe_timeout(), Duration::from_secs(5));
        assert_eq!(settings.generate_timeout(), Duration::from_secs(60));
        assert_eq!(settings.readiness_ttl(), None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_with_backend_url_trims_trailing_slash() {
        let settings = GatewaySettings::with_backend_url("http://localhost:11434/ ");
        assert_eq!(settings.backend_url, "http://localhost:11434");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = GatewaySettings::default();
        settings.backend_url = String::new();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyBackendUrl));

        let mut settings = GatewaySettings::default();
        settings.backend_url = "ollama:11434".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBackendUrl(_))
        ));

        let mut settings = GatewaySettings::default();
        settings.model = " ".to_string();
        assert_eq!(settings.validate(), Err(SettingsError::EmptyModel));

        let mut settings = GatewaySettings::default();
        settings.probe_timeout_secs = 0;
        assert_eq!(settings.validate(), Err(SettingsError::ZeroTimeout("probe")));

        let mut settings = GatewaySettings::default();
        settings.generate_timeout_secs = 0;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ZeroTimeout("generate"))
        );
    }

    #[test]
    fn test_partial_settings_deserialize_with_defaults() {
        let settings: GatewaySettings =
            serde_json::from_str(r#"{"readiness_ttl_secs": 3}"#).unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.readiness_ttl(), Some(Duration::from_secs(3)));
    }
}
