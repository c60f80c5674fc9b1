//! Backend inventory entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the backend's model inventory.
///
/// Only `name` is consumed; the remaining fields (size, digest, details...)
/// are kept as a loose map so nothing is lost when the entry is logged
/// or re-serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model tag, e.g. `gemma2:2b`.
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelDescriptor {
    /// Descriptor carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Pick the first model whose name contains `needle`.
///
/// Matching is case-sensitive and follows inventory order.
pub fn select_model<'a>(models: &'a [ModelDescriptor], needle: &str) -> Option<&'a ModelDescriptor> {
    models.iter().find(|m| m.name.contains(needle))
}
