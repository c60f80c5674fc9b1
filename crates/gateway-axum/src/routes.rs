//! Route definitions and router construction.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %o, "Ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Create the gateway router.
///
/// `/static` is only mounted when the context carries a static directory.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let static_dir = ctx.static_dir.clone();
    let state: AppState = Arc::new(ctx);

    let mut router = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::pages::health))
        .route("/status", get(handlers::gateway::status))
        .route("/generate", post(handlers::gateway::generate))
        .route("/chat", post(handlers::gateway::chat))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}
