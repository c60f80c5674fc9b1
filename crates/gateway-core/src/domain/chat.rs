//! Request and reply types for the generate and chat endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt forwarded verbatim to the backend.
    pub prompt: String,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message.
    pub message: String,
    /// Wrap the message in the prompt template before forwarding.
    ///
    /// `use_langchain` is accepted for clients of the previous service.
    #[serde(default = "default_use_template", alias = "use_langchain")]
    pub use_template: bool,
}

const fn default_use_template() -> bool {
    true
}

/// How a prompt reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardMethod {
    /// Prompt forwarded as-is.
    Direct,
    /// Prompt wrapped in the prompt template.
    Templated,
}

impl ForwardMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Templated => "templated",
        }
    }
}

/// Normalized reply returned by `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendReply {
    /// Generated text.
    pub response: String,
    /// Model that produced the text.
    pub model: String,
    /// Whether the prompt was templated.
    pub method: ForwardMethod,
}
