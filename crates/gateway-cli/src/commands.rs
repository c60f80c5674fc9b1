//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use gateway_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use gateway_axum::{CorsConfig, ServerConfig};
use gateway_core::{
    DEFAULT_BACKEND_URL, DEFAULT_GENERATE_TIMEOUT_SECS, DEFAULT_MODEL, DEFAULT_MODEL_FILTER,
    DEFAULT_PROBE_TIMEOUT_SECS, GatewaySettings,
};

/// Default gateway address probed by the smoke test.
pub const DEFAULT_SMOKE_URL: &str = "http://localhost:8000";

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway
    Serve(ServeArgs),

    /// Check a running gateway: status, /generate and /chat
    Smoke {
        /// Base URL of the gateway under test
        #[arg(long = "base-url", default_value = DEFAULT_SMOKE_URL)]
        base_url: String,
    },
}

/// Options for `serve`. Every flag can also come from the environment.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "GATEWAY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "GATEWAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Base URL of the Ollama server
    #[arg(long = "ollama-host", env = "OLLAMA_HOST", default_value = DEFAULT_BACKEND_URL)]
    pub ollama_host: String,

    /// Model name sent with every generation request
    #[arg(long, env = "GATEWAY_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Substring a listed model must contain for the gateway to be ready
    #[arg(long = "model-filter", env = "GATEWAY_MODEL_FILTER", default_value = DEFAULT_MODEL_FILTER)]
    pub model_filter: String,

    /// Timeout for readiness probes, in seconds
    #[arg(long = "probe-timeout-secs", env = "GATEWAY_PROBE_TIMEOUT_SECS", default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    pub probe_timeout_secs: u64,

    /// Timeout for generation requests, in seconds
    #[arg(long = "generate-timeout-secs", env = "GATEWAY_GENERATE_TIMEOUT_SECS", default_value_t = DEFAULT_GENERATE_TIMEOUT_SECS)]
    pub generate_timeout_secs: u64,

    /// Reuse a ready probe result for this many seconds (0 disables)
    #[arg(long = "readiness-ttl-secs", env = "GATEWAY_READINESS_TTL_SECS", default_value_t = 0)]
    pub readiness_ttl_secs: u64,

    /// Directory holding index.html and the /static assets
    #[arg(long = "static-dir", env = "GATEWAY_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Serve the API only (no index page assets, no /static)
    #[arg(long = "api-only")]
    pub api_only: bool,

    /// Comma-separated CORS origins; all origins are allowed when empty
    #[arg(long = "allowed-origins", env = "GATEWAY_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    /// Translate the flags into the server configuration.
    pub fn into_config(self) -> ServerConfig {
        let origins: Vec<String> = self
            .allowed_origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        let cors = if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins)
        };

        ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: (!self.api_only).then_some(self.static_dir),
            cors,
            gateway: GatewaySettings {
                model: self.model,
                model_filter: self.model_filter,
                probe_timeout_secs: self.probe_timeout_secs,
                generate_timeout_secs: self.generate_timeout_secs,
                readiness_ttl_secs: self.readiness_ttl_secs,
                ..GatewaySettings::with_backend_url(&self.ollama_host)
            },
        }
    }
}
