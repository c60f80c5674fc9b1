//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the backend adapter, the probe and
//! the forwarder are wired together for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use gateway_core::{
    BackendProbe, GatewaySettings, ModelBackendPort, PromptForwarder, PromptTemplate,
};
use gateway_ollama::OllamaClient;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default port for the gateway HTTP server.
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default directory holding `index.html` and other static assets.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins, methods and headers.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory served under `/static`; `index.html` in it backs `/`.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Backend and forwarding settings.
    pub gateway: GatewaySettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            cors: CorsConfig::default(),
            gateway: GatewaySettings::default(),
        }
    }
}

impl ServerConfig {
    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
#[derive(Debug)]
pub struct AxumContext {
    /// Readiness probe backing `/status`.
    pub probe: Arc<BackendProbe>,
    /// Forwarder backing `/generate` and `/chat`.
    pub forwarder: Arc<PromptForwarder>,
    /// Directory holding `index.html`, if any.
    pub static_dir: Option<PathBuf>,
}

impl AxumContext {
    /// Wire the services around an already-built backend.
    pub fn from_backend(
        backend: Arc<dyn ModelBackendPort>,
        settings: &GatewaySettings,
        static_dir: Option<PathBuf>,
    ) -> Self {
        let probe = Arc::new(BackendProbe::new(backend.clone(), settings));
        let forwarder = Arc::new(PromptForwarder::new(
            backend,
            probe.clone(),
            PromptTemplate::default(),
            settings,
        ));
        Self {
            probe,
            forwarder,
            static_dir,
        }
    }
}

/// Build the context with the Ollama HTTP client as backend.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    config
        .gateway
        .validate()
        .context("Invalid gateway settings")?;

    let backend = OllamaClient::new(&config.gateway).context("Failed to build HTTP client")?;

    info!(
        target: "gateway.config",
        backend_url = %backend.base_url(),
        model = %config.gateway.model,
        model_filter = %config.gateway.model_filter,
        probe_timeout_secs = config.gateway.probe_timeout_secs,
        generate_timeout_secs = config.gateway.generate_timeout_secs,
        readiness_ttl_secs = config.gateway.readiness_ttl_secs,
        "Gateway bootstrap resolved settings"
    );

    Ok(AxumContext::from_backend(
        Arc::new(backend),
        &config.gateway,
        config.static_dir.clone(),
    ))
}

/// Start the web server and run until Ctrl-C or SIGTERM.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
    }
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
