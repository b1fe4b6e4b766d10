//! Persona domain model.
//!
//! Represents configurable AI-assistant profiles. Each persona combines
//! prompt text, retrieval settings, document-set references, an optional
//! model override, and suggested starter interactions.

use serde::{Deserialize, Serialize};

/// A pair of instruction texts governing an assistant's behavior.
///
/// A persona may own several prompts upstream, but the editor only ever
/// reads and writes the first one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    /// Unique identifier assigned by the persistence backend
    pub id: String,
    /// Instructions describing who the assistant is
    #[serde(default)]
    pub system_prompt: String,
    /// Instructions describing what the assistant should do
    #[serde(default)]
    pub task_prompt: String,
}

/// A pre-authored example prompt shown to end users as a one-click
/// conversation starter.
///
/// Starter messages have positional identity only: entries are appended and
/// removed by index, never reordered, and duplicate content is allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarterMessage {
    pub name: String,
    pub description: String,
    pub message: String,
}

impl StarterMessage {
    /// An empty template appended when the operator adds a new row.
    pub fn blank() -> Self {
        Self::default()
    }

    /// All three sub-fields are required once the entry exists.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty() && !self.message.is_empty()
    }
}

/// An externally-owned, named collection of searchable documents a persona
/// may be restricted to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSet {
    pub id: String,
    pub name: String,
}

/// A persisted persona, read back from the backend when editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Unique identifier assigned by the persistence backend
    pub id: String,
    /// Display name, immutable once the persona exists
    pub name: String,
    /// Human-readable description of what the persona is for
    pub description: String,
    /// Retrieved chunk count; `None` means "use default", `Some(0)` means
    /// retrieval was disabled when the persona was saved
    #[serde(default)]
    pub num_chunks: Option<u32>,
    /// Referenced document sets; empty means "search all"
    #[serde(default)]
    pub document_set_ids: Vec<String>,
    #[serde(default)]
    pub include_citations: bool,
    #[serde(default)]
    pub llm_relevance_filter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_model_version_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starter_messages: Option<Vec<StarterMessage>>,
    /// Prompts owned by this persona; the editor manages only the first
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

impl Persona {
    /// The prompt the editor reads and writes.
    pub fn first_prompt(&self) -> Option<&Prompt> {
        self.prompts.first()
    }
}
