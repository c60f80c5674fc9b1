//! Page handlers - the chat frontend and the liveness check.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use crate::state::AppState;

/// Body served when no `index.html` is available.
pub const FRONTEND_NOT_FOUND: &str = "<h1>Frontend not found. Please check static/index.html</h1>";

/// Serve `index.html` from the static directory, or the fallback page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let Some(ref dir) = state.static_dir else {
        return Html(FRONTEND_NOT_FOUND.to_string());
    };

    let path = dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "index.html unavailable");
            Html(FRONTEND_NOT_FOUND.to_string())
        }
    }
}

/// Liveness of the gateway itself; never touches the backend.
pub async fn health() -> &'static str {
    "OK"
}
