//! Prompt template used by the templated chat path.
//!
//! The template is a fixed text skeleton with a single `{question}`
//! placeholder. The user's message is substituted verbatim: no escaping,
//! no length limit.

use crate::error::GatewayError;

/// Placeholder replaced by the user's message.
pub const QUESTION_PLACEHOLDER: &str = "{question}";

/// Built-in template.
pub const DEFAULT_TEMPLATE: &str = "You are a helpful AI assistant powered by Gemma 2B. \
Please provide a clear and concise response to the following question:\n\
\n\
Question: {question}\n\
\n\
Answer:";

/// A validated prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Build a template, rejecting text without the `{question}` placeholder.
    pub fn new(text: impl Into<String>) -> Result<Self, GatewayError> {
        let text = text.into();
        if !text.contains(QUESTION_PLACEHOLDER) {
            return Err(GatewayError::TemplateRenderFailure(format!(
                "template is missing the {QUESTION_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self { text })
    }

    /// Raw template text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitute `message` into the template.
    ///
    /// Only the template's own placeholder is replaced; a `{question}`
    /// inside the message is left untouched.
    pub fn render(&self, message: &str) -> String {
        match self.text.split_once(QUESTION_PLACEHOLDER) {
            Some((head, tail)) => {
                let mut out = String::with_capacity(self.text.len() + message.len());
                out.push_str(head);
                out.push_str(message);
                out.push_str(tail);
                out
            }
            // Unreachable through `new`, kept total for `Default`-built values.
            None => self.text.clone(),
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
