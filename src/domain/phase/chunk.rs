use serde::{Deserialize, Serialize};

/// A static text fragment of a phase's prompt template.
///
/// An optional chunk acts as a conditional lead-in: it only appears when the
/// field sharing its position was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptChunk {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub order: i64,
}

impl PromptChunk {
    /// Create a chunk that is always emitted.
    pub fn new(content: impl Into<String>, order: i64) -> Self {
        Self { content: content.into(), is_optional: false, order }
    }

    /// Create a chunk gated by the field at the same position.
    pub fn optional(content: impl Into<String>, order: i64) -> Self {
        Self { content: content.into(), is_optional: true, order }
    }
}
