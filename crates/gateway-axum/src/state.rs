//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Handlers only read from it; the context holds no per-request state.
pub type AppState = Arc<AxumContext>;
