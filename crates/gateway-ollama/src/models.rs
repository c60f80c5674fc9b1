//! Ollama wire types.
//!
//! Only the inventory response needs its own type; generate replies are
//! kept as loose JSON objects and the request body is
//! [`gateway_core::GenerateCall`].

use gateway_core::ModelDescriptor;
use serde::{Deserialize, Serialize};

/// Inventory endpoint, relative to the base URL.
pub const TAGS_PATH: &str = "/api/tags";

/// Generate endpoint, relative to the base URL.
pub const GENERATE_PATH: &str = "/api/generate";

/// Response of `GET /api/tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagsResponse {
    /// Installed models; a reply without the field lists none.
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}
